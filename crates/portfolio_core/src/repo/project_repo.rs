//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/list/count over the `projects` table.
//! - Keep SQL and column naming inside the persistence boundary.
//!
//! # Invariants
//! - Listing is ordered by `CreatedAt DESC, id DESC`.
//! - Inserts are a single statement, so a row is either fully visible or absent.

use crate::db::DbError;
use crate::model::project::{NewProject, Project, ProjectId, ProjectValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    Title,
    Description,
    ImageFileName,
    CreatedAt
FROM projects";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for project persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ProjectValidationError),
    Db(DbError),
    InvalidData(String),
}

impl RepoError {
    /// Returns the validation failure when this error came from input checks.
    pub fn as_validation(&self) -> Option<ProjectValidationError> {
        match self {
            Self::Validation(err) => Some(*err),
            _ => None,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted project data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ProjectValidationError> for RepoError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for project persistence.
pub trait ProjectRepository {
    fn create_project(&self, project: &NewProject) -> RepoResult<ProjectId>;
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    fn count_projects(&self) -> RepoResult<u64>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(&self, project: &NewProject) -> RepoResult<ProjectId> {
        self.conn.execute(
            "INSERT INTO projects (Title, Description, ImageFileName) VALUES (?1, ?2, ?3);",
            params![
                project.title(),
                project.description(),
                project.image_file_name(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PROJECT_SELECT_SQL} ORDER BY CreatedAt DESC, id DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();

        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }

    fn count_projects(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM projects;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative project count `{count}`")))
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let id: ProjectId = row.get("id")?;
    let created_at = row.get::<_, Option<i64>>("CreatedAt")?.ok_or_else(|| {
        RepoError::InvalidData(format!("missing CreatedAt for project id {id}"))
    })?;

    Ok(Project {
        id,
        title: row.get("Title")?,
        description: row.get("Description")?,
        image_file_name: row.get("ImageFileName")?,
        created_at,
    })
}
