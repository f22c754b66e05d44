//! GitHub repository model.

use serde::{Deserialize, Serialize};

/// One repository as shown on the showcase.
///
/// Deserializes from the GitHub REST representation (`html_url`,
/// `stargazers_count`) and serializes camelCase for the rendering layer.
/// Any other GitHub fields are ignored, including the API's own `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    /// GitHub repository ID.
    pub id: i64,

    /// Short repository name (e.g., "substrate-connect").
    pub name: String,

    /// Web URL for the repository.
    #[serde(rename(deserialize = "html_url"))]
    pub url: String,

    /// Repository description.
    pub description: Option<String>,

    /// Primary language reported by GitHub.
    pub language: Option<String>,

    /// Star count, the only ranking key.
    #[serde(rename(deserialize = "stargazers_count"))]
    pub popularity: u64,
}

/// Fully qualified `owner/name` reference to a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// `owner/name` form.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}
