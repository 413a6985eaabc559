//! Domain model: fetched beers, persisted records and the detail projection

mod beer;

pub use beer::{Beer, BeerRecord, CurrentDetail, RecordId};
