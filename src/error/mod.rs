//! Error types for poll cycles and row rendering.
//!
//! A poll cycle can fail in two ways before any row is touched: the HTTP
//! request itself fails ([`PollError::Transport`]) or the body cannot be
//! decoded into a snapshot ([`PollError::Decode`]). Both end the cycle;
//! the next interval tick starts a fresh one.
//!
//! Once a snapshot is in hand, failures are scoped per row: a
//! [`RenderError`] affects only the row that produced it and never aborts
//! the rest of the cycle.

use thiserror::Error;

use crate::view_state::RowId;

/// A poll cycle failure. Terminal for the current cycle only.
#[derive(Debug, Error)]
pub enum PollError {
    /// Network failure or non-2xx HTTP status.
    #[error("transport error fetching {url}: {message}")]
    Transport { url: String, message: String },

    /// Response body is not valid JSON or lacks the expected shape.
    #[error("could not decode stats payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PollError {
    /// Short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            PollError::Transport { .. } => "transport",
            PollError::Decode(_) => "decode",
        }
    }
}

/// A single row failed to update during snapshot application.
///
/// The offending row keeps its previous value; other rows still update.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The snapshot field driving a gauge row has no parseable numeric prefix.
    #[error("row {row:?}: no numeric prefix in {value:?}")]
    UnparseableValue { row: RowId, value: String },

    /// The row's cell shape does not match what its id requires
    /// (e.g. a gauge update dispatched onto a text cell).
    #[error("row {row:?}: cell shape does not accept this update")]
    CellMismatch { row: RowId },
}

impl RenderError {
    /// The row this error is scoped to.
    pub fn row(&self) -> &RowId {
        match self {
            RenderError::UnparseableValue { row, .. } => row,
            RenderError::CellMismatch { row } => row,
        }
    }
}
