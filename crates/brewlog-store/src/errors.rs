//! Error handling for brewlog-store
//!
//! Wraps brewlog-core `ExError` with store-specific constructors. Each
//! store operation maps its failures onto exactly one kind.

use brewlog_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// The table cannot be opened or created
pub fn storage_unavailable(op: &str, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::StorageUnavailable)
        .with_op(op)
        .with_message(err.to_string())
}

/// An insert statement was rejected; nothing was written
pub fn write_error(op: &str, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Write)
        .with_op(op)
        .with_message(err.to_string())
}

/// A read statement failed
pub fn read_error(op: &str, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Read)
        .with_op(op)
        .with_message(err.to_string())
}

/// Filesystem failure while preparing the database location
pub fn io_error(op: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::StorageUnavailable)
        .with_op(op)
        .with_message(err.to_string())
}
