//! Application settings.
//!
//! Settings are read from an optional JSON file. Every field has a default,
//! so a missing file or a partial file is fine.

use crate::error::AppError;
use crate::models::profile::GITHUB_USERNAME;
use crate::models::RepoRef;
use crate::services::display_rules::{Substitution, UrlOverride};
use crate::services::github_client::GitHubClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default settings filename, looked up in the working directory.
pub const SETTINGS_FILE: &str = "showcase.json";

/// Default companion server port.
pub const DEFAULT_PORT: u16 = 4173;

/// Largest page GitHub serves for the repository listing.
pub const MAX_PER_PAGE: u32 = 100;

/// Number of repositories shown on the page.
pub const DEFAULT_DISPLAY_LIMIT: usize = 6;

/// What to fetch and how to rearrange it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseTargets {
    /// GitHub handle whose repositories are listed.
    pub username: String,

    /// Page size of the single listing request (max 100).
    pub per_page: u32,

    /// Maximum number of repositories in the display list.
    pub display_limit: usize,

    /// Exactly two sentinel substitutions, applied in order.
    pub substitutions: Vec<Substitution>,

    /// Names whose positions are swapped when both are present.
    pub swap: (String, String),

    /// URL override applied by name.
    pub url_override: UrlOverride,
}

impl Default for ShowcaseTargets {
    fn default() -> Self {
        Self {
            username: GITHUB_USERNAME.to_string(),
            per_page: MAX_PER_PAGE,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            substitutions: vec![
                Substitution::new("sc-simple-demo", RepoRef::new("polkadot-ui", "library")),
                Substitution::new(
                    "sc-parachain-demo",
                    RepoRef::new("paritytech", "substrate-connect"),
                ),
            ],
            swap: ("library".to_string(), "substrate-connect".to_string()),
            url_override: UrlOverride {
                name: "dashboard".to_string(),
                url: "https://github.com/polkadot-fellows/dashboard".to_string(),
            },
        }
    }
}

/// Companion server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,

    /// Built rendering layer to serve next to the API, if any.
    pub frontend_dist: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_dist: None,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub github: GitHubClientConfig,
    pub showcase: ShowcaseTargets,
    pub server: ServerSettings,
}

impl Settings {
    /// Load settings from `path`, using defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "[settings] {} not found, using defaults",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            AppError::invalid_input(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;
        log::info!("[settings] Loaded {}", path.display());
        Ok(settings)
    }

    /// Reject values the loader cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.github.timeout_secs == 0 {
            return Err(AppError::invalid_input_field(
                "timeout must be at least one second",
                "github.timeout_secs",
            ));
        }
        if self.showcase.username.trim().is_empty() {
            return Err(AppError::invalid_input_field(
                "username must not be empty",
                "showcase.username",
            ));
        }
        if !(1..=MAX_PER_PAGE).contains(&self.showcase.per_page) {
            return Err(AppError::invalid_input_field(
                format!("per_page must be between 1 and {}", MAX_PER_PAGE),
                "showcase.per_page",
            ));
        }
        if self.showcase.display_limit == 0 {
            return Err(AppError::invalid_input_field(
                "display_limit must be at least 1",
                "showcase.display_limit",
            ));
        }
        if self.showcase.substitutions.len() != 2 {
            return Err(AppError::invalid_input_field(
                format!(
                    "exactly two substitutions are required, got {}",
                    self.showcase.substitutions.len()
                ),
                "showcase.substitutions",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.showcase.username, "wirednkod");
        assert_eq!(settings.showcase.display_limit, 6);
        assert_eq!(settings.github.timeout_secs, 30);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("showcase.json");
        std::fs::write(
            &path,
            r#"{ "github": { "base_url": "http://127.0.0.1:9999" }, "server": { "port": 8080 } }"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.github.base_url, "http://127.0.0.1:9999");
        assert_eq!(settings.github.timeout_secs, 30);
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.showcase, ShowcaseTargets::default());
    }

    #[test]
    fn test_malformed_file_is_invalid_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("showcase.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { .. }));
    }

    #[test]
    fn test_per_page_bounds() {
        let mut settings = Settings::default();
        settings.showcase.per_page = 101;
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidInput { field: Some(ref f), .. } if f == "showcase.per_page"
        ));
    }

    #[test]
    fn test_substitution_arity() {
        let mut settings = Settings::default();
        settings.showcase.substitutions.pop();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_default_targets() {
        let targets = ShowcaseTargets::default();
        assert_eq!(targets.substitutions[0].sentinel, "sc-simple-demo");
        assert_eq!(targets.substitutions[0].repo.full_name(), "polkadot-ui/library");
        assert_eq!(targets.substitutions[1].sentinel, "sc-parachain-demo");
        assert_eq!(
            targets.substitutions[1].repo.full_name(),
            "paritytech/substrate-connect"
        );
        assert_eq!(targets.url_override.name, "dashboard");
    }
}
