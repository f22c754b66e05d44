//! Companion server command.

use crate::error::AppError;
use crate::services::companion_server::{start_companion_server, CompanionState};
use crate::services::github_client::GitHubClient;
use crate::settings::Settings;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

/// Run the companion server until Ctrl-C.
pub async fn run(settings: &Settings) -> Result<ExitCode, AppError> {
    let client = GitHubClient::new(settings.github.clone())?;
    let state = CompanionState::new(Arc::new(client), settings.showcase.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    let handle =
        start_companion_server(addr, settings.server.frontend_dist.clone(), state).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::internal(format!("Failed to listen for Ctrl-C: {}", e)))?;

    handle.stop().await;
    Ok(ExitCode::SUCCESS)
}
