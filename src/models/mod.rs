//! Data models for the application.
//!
//! These models represent the repository data fetched from GitHub, the view
//! model handed to the rendering layer, and the static profile content.

pub mod profile;
pub mod repository;
pub mod view_model;

// Re-exports for convenient access
pub use profile::{Education, Experience, ExperienceSections, Profile};
pub use repository::{RepoRef, RepositoryRecord};
pub use view_model::{LoadStatus, RepositoryView};
