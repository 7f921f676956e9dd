//! Core domain logic for the portfolio site.
//! This crate owns project persistence and its invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::project::{NewProject, Project, ProjectId, ProjectValidationError};
pub use repo::project_repo::{ProjectRepository, RepoError, RepoResult, SqliteProjectRepository};
pub use service::project_service::ProjectService;
pub use store::{ProjectStore, StoreConfig};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
