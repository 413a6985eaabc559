//! Repository layer persisting fetched beers to SQLite

pub mod history_store;

pub use history_store::HistoryStore;
