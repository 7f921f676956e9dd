//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas required by concurrent request handling.
//! - Trigger schema migrations before returning a usable connection.
//!
//! # Invariants
//! - Returned connections wait up to `BUSY_TIMEOUT` on a locked database.
//! - Returned connections have migrations fully applied.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{debug, error};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a SQLite database file and applies all pending migrations.
///
/// The file is created when it does not exist yet. Opening an existing file
/// never drops or rewrites stored rows.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    let path = path.as_ref();
    let conn = Connection::open(path).map_err(|source| {
        error!(
            "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
            started_at.elapsed().as_millis(),
            source
        );
        DbError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    finish_open(conn, "file", started_at)
}

/// Opens an in-memory SQLite database and applies all pending migrations.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    let conn = Connection::open_in_memory()?;
    finish_open(conn, "memory", started_at)
}

fn finish_open(mut conn: Connection, mode: &str, started_at: Instant) -> DbResult<Connection> {
    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            // Every store operation opens a connection, so this stays at debug.
            debug!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)?;
    Ok(())
}
