//! Repository Showcase - GitHub repository loader for a portfolio page.
//!
//! Fetches a user's public repositories, ranks them by stars, applies a few
//! name-keyed substitutions, and exposes the result as a view model for a
//! separate rendering layer, together with the static profile content.

pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod settings;

use clap::Parser;
use commands::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Install the log subscriber. `RUST_LOG` overrides the default filter.
fn init_logging() {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("repo_showcase=info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(commands::execute(cli)) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
