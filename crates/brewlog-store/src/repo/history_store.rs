//! Append-only history of fetched beers
//!
//! `HistoryStore` owns the single SQLite connection for the process. It is
//! created once at startup and handed to whoever needs it; there is no
//! global handle. Each operation is one statement, with no transaction
//! spanning operations. A read issued after a write observes it because
//! calls happen in program order on the same connection.

#![allow(clippy::result_large_err)]

use crate::db;
use crate::errors::{read_error, write_error, Result};
use crate::schema::ensure_schema;
use brewlog_core::model::{Beer, BeerRecord, RecordId};
use brewlog_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::path::Path;

const INSERT_SQL: &str = "INSERT INTO beers (brand, name, style) VALUES (?1, ?2, ?3)";
const LIST_SQL: &str = "SELECT id, brand, name, style FROM beers ORDER BY id ASC";
const MEMORY_PATH: &str = ":memory:";

pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Open a file-backed store and make sure the table exists
    ///
    /// # Errors
    ///
    /// `StorageUnavailable` when the file cannot be opened or the table
    /// cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Self::open_logged(&path.display().to_string(), || {
            let conn = db::open(path)?;
            db::configure(&conn)?;
            Ok(conn)
        })
    }

    /// Open a store backed by a private in-memory database
    ///
    /// Logged as `history_open` with path `:memory:`.
    ///
    /// # Errors
    ///
    /// `StorageUnavailable` if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self> {
        Self::open_logged(MEMORY_PATH, db::open_in_memory)
    }

    fn open_logged<F>(path: &str, connect: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Connection>,
    {
        log_op_start!("history_open", path = path);
        let start = std::time::Instant::now();

        let result = connect().and_then(Self::from_connection);

        match &result {
            Ok(_) => {
                log_op_end!(
                    "history_open",
                    duration_ms = start.elapsed().as_millis() as u64,
                    path = path
                );
            }
            Err(e) => {
                log_op_error!(
                    "history_open",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    path = path
                );
            }
        }
        result
    }

    /// Wrap an existing connection and make sure the table exists
    ///
    /// # Errors
    ///
    /// `StorageUnavailable` if the table cannot be created.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Idempotently create the `beers` table
    ///
    /// # Errors
    ///
    /// `StorageUnavailable`; history cannot be used after this fails.
    pub fn ensure_schema(&self) -> Result<()> {
        ensure_schema(&self.conn)
    }

    /// Append one row and return its assigned id
    ///
    /// # Errors
    ///
    /// `WriteError` if SQLite rejects the statement. Nothing was written in
    /// that case and the caller must not retry on its own.
    pub fn insert(&self, brand: &str, name: &str, style: &str) -> Result<RecordId> {
        log_op_start!("history_insert", brand = brand, name = name);
        let start = std::time::Instant::now();

        let result = self
            .conn
            .execute(INSERT_SQL, rusqlite::params![brand, name, style])
            .map(|_| RecordId(self.conn.last_insert_rowid()))
            .map_err(|e| write_error("history_insert", e));

        match &result {
            Ok(id) => {
                log_op_end!(
                    "history_insert",
                    duration_ms = start.elapsed().as_millis() as u64,
                    record_id = id.get()
                );
            }
            Err(e) => {
                log_op_error!(
                    "history_insert",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }
        result
    }

    /// Convenience wrapper over `insert` for a fetched beer
    ///
    /// # Errors
    ///
    /// Same as `insert`.
    pub fn insert_beer(&self, beer: &Beer) -> Result<RecordId> {
        self.insert(&beer.brand, &beer.name, &beer.style)
    }

    /// Every row in the table, in insertion order
    ///
    /// # Errors
    ///
    /// `ReadError` on storage access failure.
    pub fn list_all(&self) -> Result<Vec<BeerRecord>> {
        log_op_start!("history_list");
        let start = std::time::Instant::now();

        let result = self.query_all();

        match &result {
            Ok(records) => {
                log_op_end!(
                    "history_list",
                    duration_ms = start.elapsed().as_millis() as u64,
                    history_len = records.len() as u64
                );
            }
            Err(e) => {
                log_op_error!(
                    "history_list",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }
        result
    }

    fn query_all(&self) -> Result<Vec<BeerRecord>> {
        let mut stmt = self
            .conn
            .prepare(LIST_SQL)
            .map_err(|e| read_error("history_list", e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(BeerRecord::new(
                    RecordId(row.get(0)?),
                    Beer {
                        brand: row.get(1)?,
                        name: row.get(2)?,
                        style: row.get(3)?,
                    },
                ))
            })
            .map_err(|e| read_error("history_list", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| read_error("history_list", e))?;
        Ok(rows)
    }

    /// Number of rows in the table
    ///
    /// # Errors
    ///
    /// `ReadError` on storage access failure.
    pub fn count(&self) -> Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM beers", [], |row| row.get::<_, i64>(0))
            .map(|n| n as u64)
            .map_err(|e| read_error("history_count", e))
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
