//! brewlog Core - domain model, in-memory views and shared facilities
//!
//! This crate provides:
//! - The beer model (`Beer`, `BeerRecord`, `RecordId`, `CurrentDetail`)
//! - `BeerView`, the current-detail and history projections
//! - Plain-text rendering of those projections
//! - The structured error facility (`ExError`, `ExErrorKind`, `BeerError`)
//! - The structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod view;

// Re-export commonly used types
pub use errors::{BeerError, ExError, ExErrorKind, Result};
pub use model::{Beer, BeerRecord, CurrentDetail, RecordId};
pub use view::BeerView;

#[doc(hidden)]
pub use brewlog_core_types as __core_types;
