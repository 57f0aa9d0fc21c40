//! Stream-processing error types with proper context preservation
//!
//! One bad record must never abort processing of subsequent records, so every
//! variant here is recoverable at the ingestion boundary. Only I/O failures on
//! the input or output streams themselves are treated as fatal by the CLI.

use thiserror::Error;

/// Errors produced while parsing records or maintaining the windowed graph.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Raw input line could not be parsed into a payment record
    #[error("Malformed record: {reason}")]
    MalformedRecord { reason: String },

    /// A required record field is absent or empty
    #[error("Missing or empty field '{field}' in payment record")]
    MissingField { field: &'static str },

    /// Timestamp text could not be parsed as an event time
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// Median requested over a graph with no nodes
    #[error("Cannot compute median degree of an empty graph")]
    EmptyGraphMedian,

    /// I/O failure on the input or output stream
    #[error("Stream I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StreamError {
    /// True for record-level errors that the ingestion boundary skips over;
    /// false for errors that should stop the run.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, StreamError::Io(_))
    }
}

/// Result type alias for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
