//! REST API routes for the companion server.
//!
//! These routes hand the repository view model and the profile content to the
//! rendering layer as JSON.

use crate::error::AppError;
use crate::models::{Profile, RepositoryView};
use crate::services::companion_server::CompanionState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

// ── Error handling ───────────────────────────────────────────────────────────

/// JSON error response for the frontend.
#[derive(Serialize)]
struct ApiError {
    code: String,
    message: String,
}

/// Wrapper to make AppError usable as an axum error response.
pub struct ApiErr(pub AppError);

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            AppError::GitHubApi { .. } | AppError::Network { .. } => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
            }
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };
        (
            status,
            Json(ApiError {
                code: code.to_string(),
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<AppError> for ApiErr {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

async fn get_repositories(State(state): State<CompanionState>) -> Json<RepositoryView> {
    Json(state.current_view().await)
}

/// Start a fresh load, as a new page load would.
async fn reload_repositories(
    State(state): State<CompanionState>,
) -> (StatusCode, Json<RepositoryView>) {
    (StatusCode::ACCEPTED, Json(state.reload().await))
}

async fn get_profile() -> Json<Profile> {
    Json(Profile::load())
}

/// Routes serving the showcase API.
pub fn showcase_api_routes() -> Router<CompanionState> {
    Router::new()
        .route("/api/repositories", get(get_repositories))
        .route("/api/repositories/reload", post(reload_repositories))
        .route("/api/profile", get(get_profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoadStatus, RepoRef, RepositoryRecord};
    use crate::services::github_client::RepositorySource;
    use crate::settings::ShowcaseTargets;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StaticSource;

    #[async_trait]
    impl RepositorySource for StaticSource {
        async fn list_user_repositories(
            &self,
            _username: &str,
            _per_page: u32,
        ) -> Result<Vec<RepositoryRecord>, AppError> {
            Ok(vec![RepositoryRecord {
                id: 1,
                name: "dashboard".to_string(),
                url: "https://github.com/wirednkod/dashboard".to_string(),
                description: None,
                language: None,
                popularity: 3,
            }])
        }

        async fn get_repository(&self, repo: &RepoRef) -> Result<RepositoryRecord, AppError> {
            Err(AppError::not_found_with_id("Repository", repo.full_name()))
        }
    }

    fn router(state: CompanionState) -> Router {
        showcase_api_routes().with_state(state)
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_repositories_loading_before_first_load() {
        let state = CompanionState::new(Arc::new(StaticSource), ShowcaseTargets::default());
        let response = router(state)
            .oneshot(Request::get("/api/repositories").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "loading");
        assert_eq!(json["error"], false);
    }

    #[tokio::test]
    async fn test_reload_then_read() {
        let state = CompanionState::new(Arc::new(StaticSource), ShowcaseTargets::default());
        let response = router(state.clone())
            .oneshot(
                Request::post("/api/repositories/reload")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let mut rx = state.subscribe().await;
        let view = rx
            .wait_for(|view| view.status != LoadStatus::Loading)
            .await
            .unwrap()
            .clone();
        assert_eq!(view.status, LoadStatus::Ready);
        assert_eq!(
            view.repositories[0].url,
            "https://github.com/polkadot-fellows/dashboard"
        );
    }

    #[tokio::test]
    async fn test_profile_route() {
        let state = CompanionState::new(Arc::new(StaticSource), ShowcaseTargets::default());
        let response = router(state)
            .oneshot(Request::get("/api/profile").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["githubUsername"], "wirednkod");
        assert_eq!(json["experience"]["preview"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_api_err_status_mapping() {
        let response = ApiErr(AppError::not_found_with_id("Route", "/api/nope")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiErr(AppError::network("down")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
