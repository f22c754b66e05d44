//! GitHub API client.
//!
//! Read-only, unauthenticated HTTP client for the two GitHub REST endpoints the
//! showcase needs. No pagination beyond the first page and no retries.

use crate::error::AppError;
use crate::models::{RepoRef, RepositoryRecord};
use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Request timeout applied to every call unless configured otherwise.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitHub API client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubClientConfig {
    /// Base URL of the API (e.g., `https://api.github.com`).
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Sent as `User-Agent`; GitHub rejects requests without one.
    pub user_agent: String,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Query parameters for listing a user's repositories.
#[derive(Debug, Clone, Serialize)]
pub struct UserReposQuery {
    /// Number of items per page (max 100).
    pub per_page: u32,

    /// Sort key: `created`, `updated`, `pushed`, `full_name`.
    pub sort: &'static str,
}

/// Where repository data comes from.
///
/// [`GitHubClient`] is the production implementation; tests script their own.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// List the first page of a user's public repositories.
    async fn list_user_repositories(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<RepositoryRecord>, AppError>;

    /// Fetch a single repository.
    async fn get_repository(&self, repo: &RepoRef) -> Result<RepositoryRecord, AppError>;
}

/// GitHub API client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubClientConfig,
}

impl GitHubClient {
    /// Create a new GitHub client.
    pub fn new(config: GitHubClientConfig) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        let user_agent = header::HeaderValue::from_str(&config.user_agent)
            .map_err(|_| AppError::invalid_input_field("Invalid user agent", "github.user_agent"))?;
        headers.insert(header::USER_AGENT, user_agent);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the full URL for an API path.
    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Handle API response errors.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<T, AppError> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| AppError::internal(format!("Failed to parse response: {}", e)))
        } else {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            // GitHub returns errors as {"message": "...", "documentation_url": "..."}
            let body_message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));

            let message = match (status, &body_message) {
                (StatusCode::FORBIDDEN, _) => "Access denied".to_string(),
                (StatusCode::NOT_FOUND, _) => "Resource not found".to_string(),
                (StatusCode::TOO_MANY_REQUESTS, _) => "Rate limit exceeded".to_string(),
                (_, Some(msg)) => msg.clone(),
                _ => format!("Request failed ({}): {}", status_code, body),
            };

            Err(AppError::github_api_full(message, status_code, endpoint))
        }
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Option<&impl Serialize>,
    ) -> Result<T, AppError> {
        let url = self.api_url(endpoint);

        let mut request = self.client.get(&url);
        if let Some(q) = query {
            request = request.query(q);
        }

        let response = request.send().await?;
        self.handle_response(response, endpoint).await
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn list_user_repositories(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<RepositoryRecord>, AppError> {
        let endpoint = format!("/users/{}/repos", username);
        let query = UserReposQuery {
            per_page,
            sort: "updated",
        };
        self.get(&endpoint, Some(&query)).await
    }

    async fn get_repository(&self, repo: &RepoRef) -> Result<RepositoryRecord, AppError> {
        let endpoint = format!("/repos/{}/{}", repo.owner, repo.name);
        self.get(&endpoint, None::<&()>).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_construction() {
        let config = GitHubClientConfig {
            base_url: "https://api.github.com/".to_string(),
            ..Default::default()
        };

        let client = GitHubClient::new(config).unwrap();
        assert_eq!(
            client.api_url("/users/wirednkod/repos"),
            "https://api.github.com/users/wirednkod/repos"
        );
    }

    #[test]
    fn test_user_repos_query_serialization() {
        let query = UserReposQuery {
            per_page: 100,
            sort: "updated",
        };

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["per_page"], 100);
        assert_eq!(json["sort"], "updated");
    }

    #[test]
    fn test_default_config() {
        let config = GitHubClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("repo-showcase/"));
    }

    #[test]
    fn test_invalid_user_agent_rejected() {
        let config = GitHubClientConfig {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };

        let err = GitHubClient::new(config).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { .. }));
    }
}
