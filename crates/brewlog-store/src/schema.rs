//! Embedded schema for the history table
//!
//! There is no migration strategy: the single table is created once with
//! `CREATE TABLE IF NOT EXISTS` and never altered.

#![allow(clippy::result_large_err)]

use crate::errors::{storage_unavailable, Result};
use rusqlite::Connection;

pub const BEERS_TABLE: &str = "beers";

/// Schema SQL, embedded at compile time
pub const BEERS_SQL: &str = include_str!("../sql/beers.sql");

/// Guarantee the `beers` table exists
///
/// Idempotent; safe to call on every start.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(BEERS_SQL)
        .map_err(|e| storage_unavailable("ensure_schema", e))
}

/// Stored `CREATE TABLE` statement for `beers`, if the table exists
pub fn table_definition(conn: &Connection) -> Result<Option<String>> {
    use rusqlite::OptionalExtension;

    conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [BEERS_TABLE],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| storage_unavailable("table_definition", e))
}
