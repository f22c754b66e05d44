//! CLI command handlers.
//!
//! Commands are organized by functionality:
//! - `repos`: run one repository load and print the view model
//! - `profile`: print the static profile content
//! - `serve`: run the companion server for the rendering layer

pub mod profile;
pub mod repos;
pub mod serve;

use crate::error::AppError;
use crate::settings::{Settings, SETTINGS_FILE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "repo-showcase")]
#[command(version)]
#[command(about = "Ranks a GitHub user's repositories for a portfolio page")]
pub struct Cli {
    /// Settings file (JSON). Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = SETTINGS_FILE)]
    pub settings: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the showcase once and print the view model as JSON
    Fetch,

    /// Print the profile content as JSON
    Profile,

    /// Serve the showcase API (and optionally a built frontend)
    Serve {
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Directory with the built frontend (must contain index.html)
        #[arg(long)]
        frontend_dist: Option<PathBuf>,
    },
}

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<ExitCode, AppError> {
    let mut settings = Settings::load(&cli.settings)?;

    match cli.command {
        Command::Fetch => repos::fetch(&settings).await,
        Command::Profile => profile::print(),
        Command::Serve {
            port,
            frontend_dist,
        } => {
            if let Some(port) = port {
                settings.server.port = port;
            }
            if frontend_dist.is_some() {
                settings.server.frontend_dist = frontend_dist;
            }
            serve::run(&settings).await
        }
    }
}
