//! Business logic services.
//!
//! This module contains the GitHub client, the showcase loader with its
//! ranking and display rules, and the companion HTTP server.
//!
//! Services are designed to be testable without network access: the loader
//! only sees a [`RepositorySource`].

pub mod companion_api;
pub mod companion_server;
pub mod display_rules;
pub mod github_client;
pub mod showcase_loader;

pub use github_client::{GitHubClient, RepositorySource};
pub use showcase_loader::ShowcaseLoader;
