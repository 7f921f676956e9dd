//! Domain model for the projects showcase.
//!
//! # Invariants
//! - Every stored project is identified by a store-assigned `ProjectId`.
//! - Text fields are trimmed and non-empty once they cross `NewProject::new`.

pub mod project;
