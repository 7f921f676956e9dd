//! Durable project store used by the web layer.
//!
//! # Responsibility
//! - Hold the configured database location (no process-global path).
//! - Run each operation on its own short-lived connection.
//!
//! # Invariants
//! - A connection is opened at the start of every operation and dropped on
//!   every exit path, including validation failures.
//! - `initialize` is idempotent and never erases stored projects.

use crate::db::open_db;
use crate::model::project::{Project, ProjectId};
use crate::repo::project_repo::{RepoResult, SqliteProjectRepository};
use crate::service::project_service::ProjectService;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Storage location for the project store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

/// Cheap-to-clone handle over the SQLite-backed project table.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    config: StoreConfig,
}

impl ProjectStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn db_path(&self) -> &Path {
        &self.config.db_path
    }

    /// Ensures the database file and `projects` table exist.
    pub fn initialize(&self) -> RepoResult<()> {
        open_db(&self.config.db_path)?;
        info!(
            "event=store_init module=store status=ok db_path={}",
            self.config.db_path.display()
        );
        Ok(())
    }

    /// Returns every project ordered by `created_at DESC, id DESC`.
    pub fn list_all(&self) -> RepoResult<Vec<Project>> {
        self.with_service(|service| service.list_projects())
    }

    pub fn count(&self) -> RepoResult<u64> {
        self.with_service(|service| service.count_projects())
    }

    /// Validates, trims and persists a project, returning its new id.
    pub fn insert(
        &self,
        title: &str,
        description: &str,
        image_file_name: &str,
    ) -> RepoResult<ProjectId> {
        let result = self
            .with_service(|service| service.create_project(title, description, image_file_name));
        match &result {
            Ok(id) => info!("event=project_insert module=store status=ok project_id={id}"),
            Err(err) => warn!("event=project_insert module=store status=error error={err}"),
        }
        result
    }

    fn with_service<T>(
        &self,
        f: impl FnOnce(&ProjectService<SqliteProjectRepository<'_>>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let conn = open_db(&self.config.db_path)?;
        let service = ProjectService::new(SqliteProjectRepository::new(&conn));
        f(&service)
    }
}
