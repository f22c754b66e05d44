//! View model handed to the rendering layer.

use super::repository::RepositoryRecord;
use serde::{Deserialize, Serialize};

/// Load state of the repository showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// No result yet.
    Loading,

    /// The display list is final (possibly empty).
    Ready,

    /// The primary listing failed; the list is ignored.
    Errored,
}

/// Read-only state exposed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryView {
    pub status: LoadStatus,

    /// Display list, at most the configured display limit long.
    pub repositories: Vec<RepositoryRecord>,

    /// Set only when the primary listing failed.
    pub error: bool,
}

impl RepositoryView {
    pub fn loading() -> Self {
        Self {
            status: LoadStatus::Loading,
            repositories: Vec::new(),
            error: false,
        }
    }

    pub fn ready(repositories: Vec<RepositoryRecord>) -> Self {
        Self {
            status: LoadStatus::Ready,
            repositories,
            error: false,
        }
    }

    pub fn errored() -> Self {
        Self {
            status: LoadStatus::Errored,
            repositories: Vec::new(),
            error: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn is_errored(&self) -> bool {
        self.status == LoadStatus::Errored
    }
}

impl Default for RepositoryView {
    fn default() -> Self {
        Self::loading()
    }
}
