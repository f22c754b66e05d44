//! Repository showcase loader.
//!
//! Fetches the user's repositories and the two auxiliary repositories
//! concurrently, ranks and rearranges them, and publishes the result as a
//! [`RepositoryView`]. Only the primary listing is fatal. Once the loader has
//! been torn down nothing is published any more, even if a fetch that was
//! already in flight completes later.

use crate::error::AppError;
use crate::models::{RepositoryRecord, RepositoryView};
use crate::services::display_rules::{self, DisplayRules};
use crate::services::github_client::RepositorySource;
use crate::settings::ShowcaseTargets;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Outcome of each of the three concurrent fetches, kept apart so they can be
/// judged individually.
#[derive(Debug)]
pub struct ShowcaseFetch {
    /// The user's repository listing.
    pub primary: Result<Vec<RepositoryRecord>, AppError>,

    /// One result per configured substitution, in the same order.
    pub auxiliary: [Result<RepositoryRecord, AppError>; 2],
}

/// Issue the listing request and both single-repository requests at once and
/// wait for all three to settle.
pub async fn fetch_sources(
    source: &dyn RepositorySource,
    targets: &ShowcaseTargets,
) -> Result<ShowcaseFetch, AppError> {
    let [first, second] = targets.substitutions.as_slice() else {
        return Err(AppError::invalid_input_field(
            "exactly two substitutions are required",
            "showcase.substitutions",
        ));
    };

    let (primary, first_aux, second_aux) = tokio::join!(
        source.list_user_repositories(&targets.username, targets.per_page),
        source.get_repository(&first.repo),
        source.get_repository(&second.repo),
    );

    Ok(ShowcaseFetch {
        primary,
        auxiliary: [first_aux, second_aux],
    })
}

/// Turn settled fetch results into the final display list.
///
/// Fails only when the primary listing failed.
pub fn build_display_list(
    targets: &ShowcaseTargets,
    fetch: ShowcaseFetch,
) -> Result<Vec<RepositoryRecord>, AppError> {
    let working = display_rules::rank(fetch.primary?, targets.display_limit);

    let mut rules = DisplayRules::new();
    for (substitution, outcome) in targets.substitutions.iter().zip(fetch.auxiliary) {
        let replacement = match outcome {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!(
                    "[showcase] Skipping substitution for {}: {}",
                    substitution.repo.full_name(),
                    e
                );
                None
            }
        };
        rules = rules.substitute(&substitution.sentinel, replacement);
    }

    let rules = rules
        .swap(&targets.swap.0, &targets.swap.1)
        .override_url(&targets.url_override);

    Ok(rules.apply(working))
}

/// Owns the published view model for one consumer.
///
/// One loader per page load: create, [`spawn`](Self::spawn) or
/// [`load`](Self::load), and [`teardown`](Self::teardown) when the consumer
/// goes away.
#[derive(Debug)]
pub struct ShowcaseLoader {
    targets: ShowcaseTargets,
    view: watch::Sender<RepositoryView>,
    teardown: CancellationToken,
}

impl ShowcaseLoader {
    pub fn new(targets: ShowcaseTargets) -> Self {
        let (view, _) = watch::channel(RepositoryView::loading());
        Self {
            targets,
            view,
            teardown: CancellationToken::new(),
        }
    }

    /// Receiver that observes every published view.
    pub fn subscribe(&self) -> watch::Receiver<RepositoryView> {
        self.view.subscribe()
    }

    /// Snapshot of the current view.
    pub fn current(&self) -> RepositoryView {
        self.view.borrow().clone()
    }

    /// Mark the consumer as gone. Results arriving afterwards are dropped.
    pub fn teardown(&self) {
        self.teardown.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.teardown.is_cancelled()
    }

    /// Publish `view` unless the loader was torn down. Returns whether it was
    /// published.
    fn publish(&self, view: RepositoryView) -> bool {
        if self.is_torn_down() {
            log::debug!("[showcase] Loader torn down, dropping {:?} result", view.status);
            return false;
        }
        self.view.send_replace(view);
        true
    }

    /// Run one full load and publish its result.
    ///
    /// Returns the computed view whether or not it was published.
    pub async fn load(&self, source: &dyn RepositorySource) -> RepositoryView {
        log::info!(
            "[showcase] Loading repositories for {}",
            self.targets.username
        );

        let result = fetch_sources(source, &self.targets)
            .await
            .and_then(|fetch| build_display_list(&self.targets, fetch));

        let view = match result {
            Ok(repositories) => {
                log::info!(
                    "[showcase] Loaded {} repositories for {}",
                    repositories.len(),
                    self.targets.username
                );
                RepositoryView::ready(repositories)
            }
            Err(e) => {
                log::error!("[showcase] Failed to load repositories: {}", e);
                RepositoryView::errored()
            }
        };

        self.publish(view.clone());
        view
    }

    /// Run [`load`](Self::load) in the background.
    pub fn spawn(self: &Arc<Self>, source: Arc<dyn RepositorySource>) -> JoinHandle<()> {
        let loader = Arc::clone(self);
        tokio::spawn(async move {
            loader.load(source.as_ref()).await;
        })
    }
}
