use brewlog_core_types::RequestId;
use thiserror::Error;

use crate::model::RecordId;

/// Result type alias using BeerError
pub type Result<T> = std::result::Result<T, BeerError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// handling, log assertions and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Remote source
    /// Remote source unreachable or returned a non-success status
    Network,
    /// Remote payload could not be parsed into brand/name/style
    MalformedResponse,

    // History store
    /// The local table cannot be opened or created; history is disabled
    StorageUnavailable,
    /// An insert statement failed; nothing was written
    Write,
    /// A list statement failed; the last loaded history stays displayed
    Read,

    // Structural/Validation
    InvalidInput,
    NotFound,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Network => "ERR_NETWORK",
            ExErrorKind::MalformedResponse => "ERR_MALFORMED_RESPONSE",
            ExErrorKind::StorageUnavailable => "ERR_STORAGE_UNAVAILABLE",
            ExErrorKind::Write => "ERR_WRITE",
            ExErrorKind::Read => "ERR_READ",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
        }
    }

    /// Whether this kind originates from the remote source
    ///
    /// Malformed payloads are handled exactly like network failures.
    pub fn is_remote(&self) -> bool {
        matches!(self, ExErrorKind::Network | ExErrorKind::MalformedResponse)
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context for
/// debugging. Store operations and the fetch workflow report failures as
/// `ExError`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    record_id: Option<RecordId>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            record_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add record ID context
    pub fn with_record_id(mut self, id: RecordId) -> Self {
        self.record_id = Some(id);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn record_id(&self) -> Option<RecordId> {
        self.record_id
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(record_id) = self.record_id {
            write!(f, " (record_id: {})", record_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised by the remote source and the in-memory view layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BeerError {
    /// Remote source could not be reached (connect, timeout, body read)
    #[error("Remote source unreachable: {reason}")]
    Network { reason: String },

    /// Remote source answered with a non-success status
    #[error("Remote source returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// Remote payload is not a JSON object with string brand/name/style
    #[error("Malformed beer payload: {reason}")]
    MalformedResponse { reason: String },

    /// Record is not present in the loaded history
    #[error("Record not found in history: {record_id}")]
    RecordNotFound { record_id: RecordId },

    /// Caller supplied an unusable value
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl From<BeerError> for ExError {
    fn from(err: BeerError) -> Self {
        match err {
            BeerError::Network { reason } => ExError::new(ExErrorKind::Network)
                .with_op("fetch_beer")
                .with_message(reason),

            BeerError::HttpStatus { status } => ExError::new(ExErrorKind::Network)
                .with_op("fetch_beer")
                .with_message(format!("HTTP status {}", status)),

            BeerError::MalformedResponse { reason } => {
                ExError::new(ExErrorKind::MalformedResponse)
                    .with_op("fetch_beer")
                    .with_message(reason)
            }

            BeerError::RecordNotFound { record_id } => ExError::new(ExErrorKind::NotFound)
                .with_record_id(record_id)
                .with_message("Record not found in history"),

            BeerError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
        }
    }
}

impl From<serde_json::Error> for BeerError {
    fn from(err: serde_json::Error) -> Self {
        BeerError::MalformedResponse {
            reason: err.to_string(),
        }
    }
}
