//! Ranking and name-keyed rearrangement of the display list.
//!
//! Nothing in here touches the network: ranking takes the primary listing and
//! the rules take whatever auxiliary records were actually fetched.

use crate::models::{RepoRef, RepositoryRecord};
use serde::{Deserialize, Serialize};

/// Replace the slot named `sentinel` with the record fetched for `repo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub sentinel: String,
    #[serde(flatten)]
    pub repo: RepoRef,
}

impl Substitution {
    pub fn new(sentinel: impl Into<String>, repo: RepoRef) -> Self {
        Self {
            sentinel: sentinel.into(),
            repo,
        }
    }
}

/// Point the entry called `name` at `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlOverride {
    pub name: String,
    pub url: String,
}

/// Sort by popularity descending and keep the first `limit` entries.
///
/// The sort is stable: equal popularity keeps the order the API returned.
pub fn rank(mut repos: Vec<RepositoryRecord>, limit: usize) -> Vec<RepositoryRecord> {
    repos.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    repos.truncate(limit);
    repos
}

fn position_of(list: &[RepositoryRecord], name: &str) -> Option<usize> {
    list.iter().position(|repo| repo.name == name)
}

/// One rule over the working list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRule {
    /// Replace the first entry named `sentinel` wholesale.
    Substitute {
        sentinel: String,
        replacement: RepositoryRecord,
    },

    /// Swap the first entries named `first` and `second` if both exist.
    Swap { first: String, second: String },

    /// Set the url of the first entry named `name`.
    OverrideUrl { name: String, url: String },
}

impl DisplayRule {
    /// Apply the rule. Returns whether the list changed.
    pub fn apply(&self, list: &mut [RepositoryRecord]) -> bool {
        let applied = match self {
            Self::Substitute {
                sentinel,
                replacement,
            } => match position_of(list, sentinel) {
                Some(slot) => {
                    list[slot] = replacement.clone();
                    true
                }
                None => false,
            },
            Self::Swap { first, second } => {
                match (position_of(list, first), position_of(list, second)) {
                    (Some(a), Some(b)) => {
                        list.swap(a, b);
                        true
                    }
                    _ => false,
                }
            }
            Self::OverrideUrl { name, url } => match position_of(list, name) {
                Some(slot) => {
                    list[slot].url = url.clone();
                    true
                }
                None => false,
            },
        };

        if applied {
            log::debug!("[showcase] Applied {}", self.describe());
        }
        applied
    }

    fn describe(&self) -> String {
        match self {
            Self::Substitute {
                sentinel,
                replacement,
            } => format!("substitution {} -> {}", sentinel, replacement.name),
            Self::Swap { first, second } => format!("swap {} <-> {}", first, second),
            Self::OverrideUrl { name, url } => format!("url override {} -> {}", name, url),
        }
    }
}

/// Ordered rule list, applied front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayRules {
    rules: Vec<DisplayRule>,
}

impl DisplayRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a substitution, or skip it when its auxiliary fetch failed.
    pub fn substitute(mut self, sentinel: &str, replacement: Option<RepositoryRecord>) -> Self {
        if let Some(replacement) = replacement {
            self.rules.push(DisplayRule::Substitute {
                sentinel: sentinel.to_string(),
                replacement,
            });
        }
        self
    }

    pub fn swap(mut self, first: &str, second: &str) -> Self {
        self.rules.push(DisplayRule::Swap {
            first: first.to_string(),
            second: second.to_string(),
        });
        self
    }

    pub fn override_url(mut self, rule: &UrlOverride) -> Self {
        self.rules.push(DisplayRule::OverrideUrl {
            name: rule.name.clone(),
            url: rule.url.clone(),
        });
        self
    }

    pub fn rules(&self) -> &[DisplayRule] {
        &self.rules
    }

    /// Run every rule once, in order.
    pub fn apply(&self, mut list: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
        for rule in &self.rules {
            rule.apply(&mut list);
        }
        list
    }
}
