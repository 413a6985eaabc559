//! brewlog Store - local history of fetched beers
//!
//! Provides:
//! - SQLite connection management
//! - The embedded `beers` table schema
//! - `HistoryStore`: ensure-schema, insert, list-all

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use repo::HistoryStore;
