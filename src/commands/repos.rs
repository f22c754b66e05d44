//! One-shot repository load.

use crate::error::AppError;
use crate::models::RepositoryView;
use crate::services::github_client::{GitHubClient, RepositorySource};
use crate::services::showcase_loader::ShowcaseLoader;
use crate::settings::Settings;
use std::process::ExitCode;

/// Run a single load against `source`.
pub async fn load_view(settings: &Settings, source: &dyn RepositorySource) -> RepositoryView {
    let loader = ShowcaseLoader::new(settings.showcase.clone());
    let view = loader.load(source).await;
    loader.teardown();
    view
}

/// Load the showcase from GitHub and print the view model.
///
/// Exits with failure when the view is errored.
pub async fn fetch(settings: &Settings) -> Result<ExitCode, AppError> {
    let client = GitHubClient::new(settings.github.clone())?;
    let view = load_view(settings, &client).await;

    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(if view.is_errored() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
