//! SQLite persistence for uploads.
//!
//! Each handler opens its own connection against the configured database
//! file; `open` initializes the schema on the way, so the first request (or a
//! fresh test database) needs no separate migration step.

use std::path::Path;

use common::model::upload::HistoryEntry;
use rusqlite::{params, Connection, OptionalExtension};

/// A persisted upload row, as stored.
#[derive(Debug)]
pub struct StoredUpload {
    pub id: i64,
    pub filename: String,
    pub created_at: String,
    pub result_path: String,
    pub data_json: String,
}

/// Opens the database and ensures the schema exists.
pub fn open(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS uploads (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            filename    TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            result_path TEXT NOT NULL,
            data_json   TEXT NOT NULL
        )",
        [],
    )?;
    Ok(conn)
}

/// Inserts a new upload and returns its server-assigned id.
///
/// `created_at` is produced in SQL as an ISO-8601 UTC timestamp.
pub fn insert_upload(
    conn: &Connection,
    filename: &str,
    result_path: &str,
    data_json: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO uploads (filename, created_at, result_path, data_json)
         VALUES (?1, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'), ?2, ?3)",
        params![filename, result_path, data_json],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All uploads, newest first.
pub fn list_uploads(conn: &Connection) -> rusqlite::Result<Vec<HistoryEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, filename, created_at FROM uploads
         ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(HistoryEntry {
            id: row.get(0)?,
            filename: row.get(1)?,
            created_at: row.get(2)?,
        })
    })?;
    rows.collect()
}

/// A single upload by id, or `None` if it does not exist.
pub fn get_upload(conn: &Connection, id: i64) -> rusqlite::Result<Option<StoredUpload>> {
    conn.query_row(
        "SELECT id, filename, created_at, result_path, data_json
         FROM uploads WHERE id = ?1",
        params![id],
        |row| {
            Ok(StoredUpload {
                id: row.get(0)?,
                filename: row.get(1)?,
                created_at: row.get(2)?,
                result_path: row.get(3)?,
                data_json: row.get(4)?,
            })
        },
    )
    .optional()
}
