//! Companion HTTP server for the rendering layer.
//!
//! Embeds an axum HTTP server that exposes the showcase API and, when a built
//! frontend is configured, serves its static files with an `index.html`
//! fallback for client-side routes.

use crate::error::AppError;
use crate::models::RepositoryView;
use crate::services::companion_api::{showcase_api_routes, ApiErr};
use crate::services::github_client::RepositorySource;
use crate::services::showcase_loader::ShowcaseLoader;
use crate::settings::ShowcaseTargets;
use axum::body::Body;
use axum::http::{Request, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Shared state for the companion server's axum routes.
///
/// Holds the loader of the current "page load". A reload replaces it and tears
/// the old one down, so a slow earlier load can never overwrite a newer one.
#[derive(Clone)]
pub struct CompanionState {
    source: Arc<dyn RepositorySource>,
    targets: ShowcaseTargets,
    loader: Arc<RwLock<Arc<ShowcaseLoader>>>,
}

impl CompanionState {
    pub fn new(source: Arc<dyn RepositorySource>, targets: ShowcaseTargets) -> Self {
        let loader = Arc::new(ShowcaseLoader::new(targets.clone()));
        Self {
            source,
            targets,
            loader: Arc::new(RwLock::new(loader)),
        }
    }

    pub async fn current_view(&self) -> RepositoryView {
        self.loader.read().await.current()
    }

    pub async fn subscribe(&self) -> watch::Receiver<RepositoryView> {
        self.loader.read().await.subscribe()
    }

    /// Replace the current loader with a fresh one and start it.
    pub async fn reload(&self) -> RepositoryView {
        let fresh = Arc::new(ShowcaseLoader::new(self.targets.clone()));
        let previous = {
            let mut guard = self.loader.write().await;
            std::mem::replace(&mut *guard, Arc::clone(&fresh))
        };
        previous.teardown();

        fresh.spawn(Arc::clone(&self.source));
        fresh.current()
    }

    /// Tear down the current loader.
    pub async fn teardown(&self) {
        self.loader.read().await.teardown();
    }
}

/// Handle to control the running companion server.
pub struct CompanionServerHandle {
    cancel_token: CancellationToken,
    local_addr: SocketAddr,
    task: JoinHandle<()>,
}

impl CompanionServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop the server gracefully and wait for it to finish.
    pub async fn stop(self) {
        log::info!("[companion] Stopping server on {}", self.local_addr);
        self.cancel_token.cancel();
        if let Err(e) = self.task.await {
            log::error!("[companion] Server task failed: {}", e);
        }
    }
}

/// Build the full router: API routes first, then the static/SPA fallback.
pub fn build_router(
    state: CompanionState,
    frontend_dist: Option<PathBuf>,
) -> Result<Router, AppError> {
    // Read index.html once at startup for the SPA fallback.
    let frontend = match frontend_dist {
        Some(dist) => {
            let index_html: Arc<str> = std::fs::read_to_string(dist.join("index.html"))
                .map_err(|e| AppError::invalid_input_field(
                    format!("Failed to read index.html: {}", e),
                    "server.frontend_dist",
                ))?
                .into();
            Some((dist, index_html))
        }
        None => None,
    };

    let router = Router::new()
        .merge(showcase_api_routes().with_state(state))
        .fallback(move |uri: Uri| {
            let frontend = frontend.clone();
            async move {
                match frontend {
                    Some((dist, html)) => spa_fallback(uri, &dist, &html).await,
                    None => not_found(&uri),
                }
            }
        })
        .layer(CorsLayer::permissive());

    Ok(router)
}

/// Start the companion HTTP server on `addr`.
///
/// Kicks off the first repository load as soon as the listener is bound.
pub async fn start_companion_server(
    addr: SocketAddr,
    frontend_dist: Option<PathBuf>,
    state: CompanionState,
) -> Result<CompanionServerHandle, AppError> {
    let app = build_router(state.clone(), frontend_dist)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
    let local_addr = listener.local_addr()?;

    log::info!("[companion] Server starting on http://{}", local_addr);
    state.reload().await;

    let cancel_token = CancellationToken::new();
    let cancel_clone = cancel_token.clone();

    // Spawn the server task with graceful shutdown
    let task = tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            cancel_clone.cancelled().await;
            state.teardown().await;
        });

        if let Err(e) = server.await {
            log::error!("[companion] Server error: {}", e);
        }

        log::info!("[companion] Server stopped");
    });

    Ok(CompanionServerHandle {
        cancel_token,
        local_addr,
        task,
    })
}

fn not_found(uri: &Uri) -> Response {
    ApiErr(AppError::not_found_with_id("Route", uri.path())).into_response()
}

/// SPA-aware fallback handler.
///
/// 1. API paths that didn't match a route get a JSON 404.
/// 2. Try to serve a static file from the dist directory.
/// 3. If no file matches, return `index.html` for client-side routes.
async fn spa_fallback(uri: Uri, dist: &Path, index_html: &str) -> Response {
    if uri.path().starts_with("/api/") {
        return not_found(&uri);
    }

    let req = match Request::builder().uri(&uri).body(Body::empty()) {
        Ok(req) => req,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match ServeDir::new(dist).oneshot(req).await {
        Ok(res) if res.status() != StatusCode::NOT_FOUND => res.into_response(),
        _ => Html(index_html.to_owned()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RepoRef, RepositoryRecord};
    use async_trait::async_trait;
    use axum::body::to_bytes;
    use tempfile::tempdir;

    struct EmptySource;

    #[async_trait]
    impl RepositorySource for EmptySource {
        async fn list_user_repositories(
            &self,
            _username: &str,
            _per_page: u32,
        ) -> Result<Vec<RepositoryRecord>, AppError> {
            Ok(Vec::new())
        }

        async fn get_repository(&self, repo: &RepoRef) -> Result<RepositoryRecord, AppError> {
            Err(AppError::not_found_with_id("Repository", repo.full_name()))
        }
    }

    fn state() -> CompanionState {
        CompanionState::new(Arc::new(EmptySource), ShowcaseTargets::default())
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_api_route_is_json_404() {
        let router = build_router(state(), None).unwrap();
        let response = router
            .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_spa_fallback_serves_index_and_assets() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>showcase</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi')").unwrap();
        let router = build_router(state(), Some(dir.path().to_path_buf())).unwrap();

        let response = router
            .clone()
            .oneshot(Request::get("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "console.log('hi')");

        let response = router
            .oneshot(Request::get("/experience").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<html>showcase</html>");
    }

    #[test]
    fn test_missing_index_html_rejected() {
        let dir = tempdir().unwrap();
        let err = build_router(state(), Some(dir.path().to_path_buf())).err().unwrap();
        assert!(matches!(err, AppError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_reload_tears_down_previous_loader() {
        let state = state();
        let first = Arc::clone(&*state.loader.read().await);

        state.reload().await;

        assert!(first.is_torn_down());
        assert!(!state.loader.read().await.is_torn_down());
    }

    #[tokio::test]
    async fn test_server_start_and_stop() {
        let handle = start_companion_server(
            SocketAddr::from(([127, 0, 0, 1], 0)),
            None,
            state(),
        )
        .await
        .unwrap();

        assert_ne!(handle.local_addr().port(), 0);
        handle.stop().await;
    }
}
