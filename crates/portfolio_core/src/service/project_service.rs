//! Project use-case service.
//!
//! # Invariants
//! - Every create goes through `NewProject::new` before reaching the repository.
//! - Service layer remains storage-agnostic.

use crate::model::project::{NewProject, Project, ProjectId};
use crate::repo::project_repo::{ProjectRepository, RepoResult};

/// Use-case service wrapper for project operations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates raw input and persists a new project.
    ///
    /// # Contract
    /// - Trimmed values are stored.
    /// - Returns `RepoError::Validation` without touching storage when any
    ///   field is blank.
    pub fn create_project(
        &self,
        title: &str,
        description: &str,
        image_file_name: &str,
    ) -> RepoResult<ProjectId> {
        let project = NewProject::new(title, description, image_file_name)?;
        self.repo.create_project(&project)
    }

    /// Lists every project newest first.
    pub fn list_projects(&self) -> RepoResult<Vec<Project>> {
        self.repo.list_projects()
    }

    pub fn count_projects(&self) -> RepoResult<u64> {
        self.repo.count_projects()
    }
}
