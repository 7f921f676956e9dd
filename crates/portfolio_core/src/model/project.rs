//! Project domain model.
//!
//! # Responsibility
//! - Define the persisted `Project` record.
//! - Own the insert-boundary validation for user supplied text.
//!
//! # Invariants
//! - `id` and `created_at` are assigned by the store and never change.
//! - `NewProject` fields are trimmed and never empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier. Monotonic, never reused.
pub type ProjectId = i64;

/// A showcased work item as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Logical reference into the image asset directory; existence is not checked.
    pub image_file_name: String,
    /// Unix epoch milliseconds, set by SQLite at insert time.
    pub created_at: i64,
}

/// Validated input for a project insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    title: String,
    description: String,
    image_file_name: String,
}

impl NewProject {
    /// Trims every field and rejects the first one left empty.
    ///
    /// Fields are checked in form order: title, description, image file name.
    pub fn new(
        title: &str,
        description: &str,
        image_file_name: &str,
    ) -> Result<Self, ProjectValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ProjectValidationError::EmptyTitle);
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(ProjectValidationError::EmptyDescription);
        }
        let image_file_name = image_file_name.trim();
        if image_file_name.is_empty() {
            return Err(ProjectValidationError::EmptyImageFileName);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            image_file_name: image_file_name.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_file_name(&self) -> &str {
        &self.image_file_name
    }
}

/// Insert-boundary validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyTitle,
    EmptyDescription,
    EmptyImageFileName,
}

impl ProjectValidationError {
    /// Form field name the error refers to.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::EmptyDescription => "description",
            Self::EmptyImageFileName => "image_file_name",
        }
    }
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title, Description, and Image file name are required (`{}` is empty)",
            self.field()
        )
    }
}

impl Error for ProjectValidationError {}
