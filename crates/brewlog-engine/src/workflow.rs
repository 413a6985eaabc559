//! Fetch-and-record workflow
//!
//! One user action runs one cycle: fetch a beer from the remote source,
//! show it, append it to the history store, then re-read the whole history
//! into the view. Each failure is logged where it happens and folded into
//! the returned `FetchOutcome`; nothing propagates as an `Err` and the
//! cycle never retries.
//!
//! - remote failure: view untouched, store untouched
//! - insert failure: fetched beer shown, history not refreshed
//! - list failure after insert: fetched beer shown, history left at its
//!   last successfully loaded state

#![allow(clippy::result_large_err)]

use brewlog_core::errors::ExError;
use brewlog_core::model::RecordId;
use brewlog_core::view::BeerView;
use brewlog_core::{log_op_end, log_op_error, log_op_start};
use brewlog_core_types::RequestContext;
use brewlog_store::errors::Result;
use brewlog_store::HistoryStore;

use crate::remote::BeerSource;

/// What one fetch cycle did
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Fetched, persisted and history refreshed
    Recorded { id: RecordId, history_len: usize },
    /// Fetched and persisted, but re-reading history failed
    RecordedHistoryStale { id: RecordId, error: ExError },
    /// Fetched and shown, but the insert failed; nothing was written
    Unpersisted { error: ExError },
    /// Fetched and shown; the store was unavailable at startup
    HistoryUnavailable,
    /// Remote source failed; nothing changed
    SourceFailed { error: ExError },
}

impl FetchOutcome {
    /// Whether a beer was fetched (and is now the current detail)
    pub fn fetched(&self) -> bool {
        !matches!(self, FetchOutcome::SourceFailed { .. })
    }

    /// Id assigned by the store, if the beer was persisted
    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            FetchOutcome::Recorded { id, .. } | FetchOutcome::RecordedHistoryStale { id, .. } => {
                Some(*id)
            }
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ExError> {
        match self {
            FetchOutcome::RecordedHistoryStale { error, .. }
            | FetchOutcome::Unpersisted { error }
            | FetchOutcome::SourceFailed { error } => Some(error),
            FetchOutcome::Recorded { .. } | FetchOutcome::HistoryUnavailable => None,
        }
    }
}

impl std::fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchOutcome::Recorded { id, history_len } => {
                write!(f, "Saved beer #{} ({} in history)", id, history_len)
            }
            FetchOutcome::RecordedHistoryStale { id, error } => {
                write!(f, "Saved beer #{}, but history could not be reloaded: {}", id, error)
            }
            FetchOutcome::Unpersisted { error } => {
                write!(f, "Fetched beer was not saved: {}", error)
            }
            FetchOutcome::HistoryUnavailable => {
                write!(f, "Fetched beer (history unavailable)")
            }
            FetchOutcome::SourceFailed { error } => write!(f, "Fetch failed: {}", error),
        }
    }
}

/// Run one fetch cycle with a fresh request context
///
/// `store` is `None` when the history store could not be opened; the
/// fetched beer is still shown.
pub fn trigger_fetch<S>(
    source: &S,
    store: Option<&HistoryStore>,
    view: &mut BeerView,
) -> FetchOutcome
where
    S: BeerSource + ?Sized,
{
    trigger_fetch_with_context(&RequestContext::new(), source, store, view)
}

/// Run one fetch cycle, tagging every log event with the request id
pub fn trigger_fetch_with_context<S>(
    ctx: &RequestContext,
    source: &S,
    store: Option<&HistoryStore>,
    view: &mut BeerView,
) -> FetchOutcome
where
    S: BeerSource + ?Sized,
{
    let request_id = &ctx.request_id;
    log_op_start!(
        "fetch_cycle",
        request_id = %request_id,
        source = %source.describe()
    );
    let start = std::time::Instant::now();

    let beer = match source.fetch_beer() {
        Ok(beer) => beer,
        Err(e) => {
            let error = ExError::from(e).with_request_id(request_id.clone());
            log_op_error!(
                "fetch_cycle",
                error.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %request_id
            );
            return FetchOutcome::SourceFailed { error };
        }
    };

    // Shown regardless of what happens to the insert
    view.show_fetched(beer.clone());

    let Some(store) = store else {
        tracing::warn!(
            op = "fetch_cycle",
            request_id = %request_id,
            "history store unavailable; fetched beer not recorded"
        );
        log_op_end!(
            "fetch_cycle",
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = %request_id,
            persisted = false
        );
        return FetchOutcome::HistoryUnavailable;
    };

    let id = match store.insert_beer(&beer) {
        Ok(id) => id,
        Err(e) => {
            let error = e.with_request_id(request_id.clone());
            log_op_error!(
                "fetch_cycle",
                error.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %request_id
            );
            return FetchOutcome::Unpersisted { error };
        }
    };

    let outcome = match store.list_all() {
        Ok(records) => {
            let history_len = records.len();
            view.replace_history(records);
            FetchOutcome::Recorded { id, history_len }
        }
        Err(e) => {
            let error = e.with_request_id(request_id.clone()).with_record_id(id);
            log_op_error!(
                "fetch_cycle",
                error.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %request_id
            );
            return FetchOutcome::RecordedHistoryStale { id, error };
        }
    };

    log_op_end!(
        "fetch_cycle",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %request_id,
        record_id = id.get(),
        persisted = true
    );
    outcome
}

/// Load the full history into the view
///
/// Used at startup and whenever the caller wants a refresh. On failure the
/// view keeps whatever it showed before.
///
/// # Errors
///
/// `ReadError` from the store, after it has been logged.
pub fn load_history(store: &HistoryStore, view: &mut BeerView) -> Result<usize> {
    log_op_start!("load_history");
    let start = std::time::Instant::now();

    let records = store.list_all().map_err(|e| {
        log_op_error!(
            "load_history",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let len = records.len();
    view.replace_history(records);

    log_op_end!(
        "load_history",
        duration_ms = start.elapsed().as_millis() as u64,
        history_len = len as u64
    );
    Ok(len)
}
