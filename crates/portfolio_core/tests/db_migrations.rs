use portfolio_core::db::migrations::latest_version;
use portfolio_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "projects");
}

#[test]
fn projects_table_has_expected_columns() {
    let conn = open_db_in_memory().unwrap();
    let mut stmt = conn.prepare("PRAGMA table_info(projects);").unwrap();
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(
        columns,
        ["id", "Title", "Description", "ImageFileName", "CreatedAt"]
    );
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO projects (Title, Description, ImageFileName) VALUES ('a', 'b', 'c');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let rows: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM projects;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn existing_unversioned_projects_table_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            Title TEXT NOT NULL,
            Description TEXT NOT NULL,
            ImageFileName TEXT NOT NULL,
            CreatedAt INTEGER NOT NULL DEFAULT 0
        );
        INSERT INTO projects (Title, Description, ImageFileName) VALUES ('kept', 'd', 'i');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let title: String = conn
        .query_row("SELECT Title FROM projects;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(title, "kept");
}

#[test]
fn datetime_text_timestamps_are_rewritten_to_epoch_millis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(FLASK_PROJECTS_DDL).unwrap();
    conn.execute_batch(
        "INSERT INTO projects (Title, Description, ImageFileName, CreatedAt)
         VALUES ('old', 'd', 'i.png', '2024-01-02 03:04:05');
         INSERT INTO projects (Title, Description, ImageFileName)
         VALUES ('defaulted', 'd', 'i.png');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());

    let mut stmt = conn
        .prepare("SELECT Title, typeof(CreatedAt), CreatedAt FROM projects ORDER BY id;")
        .unwrap();
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], ("old".to_string(), "integer".to_string(), 1_704_164_645_000));
    assert_eq!(rows[1].1, "integer");
    assert!(rows[1].2 > rows[0].2);
}

#[test]
fn rebuilt_table_keeps_ids_monotonic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(FLASK_PROJECTS_DDL).unwrap();
    conn.execute_batch(
        "INSERT INTO projects (Title, Description, ImageFileName) VALUES ('a', 'd', 'i.png');
         INSERT INTO projects (Title, Description, ImageFileName) VALUES ('b', 'd', 'i.png');
         INSERT INTO projects (Title, Description, ImageFileName) VALUES ('gone', 'd', 'i.png');
         DELETE FROM projects WHERE Title = 'gone';",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO projects (Title, Description, ImageFileName) VALUES ('c', 'd', 'i.png');",
        [],
    )
    .unwrap();

    assert_eq!(conn.last_insert_rowid(), 4);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

const FLASK_PROJECTS_DDL: &str = "CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    Title TEXT NOT NULL,
    Description TEXT NOT NULL,
    ImageFileName TEXT NOT NULL,
    CreatedAt DATETIME DEFAULT CURRENT_TIMESTAMP
);";

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
