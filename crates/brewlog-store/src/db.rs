//! Database connection management

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, storage_unavailable, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path, creating parent directories
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_error("db_open", e))?;
        }
    }
    Connection::open(path).map_err(|e| storage_unavailable("db_open", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| storage_unavailable("db_open", e))
}

/// Configure a file-backed connection
///
/// In-memory databases report `memory` as their journal mode and are left
/// as they are.
pub fn configure(conn: &Connection) -> Result<()> {
    let mode: String = conn
        .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
        .map_err(|e| storage_unavailable("db_configure", e))?;
    tracing::debug!(journal_mode = %mode, "configured sqlite connection");
    Ok(())
}
