//! brewlog Engine - the fetch-and-record workflow
//!
//! Ties the remote beer source, the history store and the in-memory view
//! together. The store handle is created by the caller and passed in
//! explicitly.

pub mod config;
pub mod remote;
pub mod workflow;

pub use config::FetchConfig;
pub use remote::{BeerSource, HttpBeerSource};
pub use workflow::{load_history, trigger_fetch, trigger_fetch_with_context, FetchOutcome};
