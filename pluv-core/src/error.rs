/// Error types for reading and parsing rain gauge data
use thiserror::Error;

/// Why a single CSV row was dropped. Never fatal to the parse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    /// The date field is not a real `YYYY-MM-DD` calendar date
    #[error("invalid date \"{0}\" (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// The precipitation field is not a finite, non-negative number
    #[error("invalid precipitation \"{0}\"")]
    InvalidPrecipitation(String),

    /// The row ended before the named field
    #[error("missing {0} field")]
    MissingField(&'static str),
}

/// Failure to obtain the CSV text from its source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The request never produced a response (network, CORS, file system)
    #[error("transport error: {0}")]
    Transport(String),
}
