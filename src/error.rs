//! Error types for Achievement Drift
//!
//! The simulation itself never fails; these cover the edges where data
//! enters the crate (feed JSON, timestamps, settings, files).

use thiserror::Error;

/// Main error type
#[derive(Error, Debug)]
pub enum DriftError {
    /// Achievement feed was not valid JSON for the expected row shape
    #[error("Malformed achievement feed: {0}")]
    Feed(#[from] serde_json::Error),

    /// `achieved_at` could not be parsed as RFC 3339 or a plain date
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A settings value is out of range
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// Command-line argument could not be parsed (native binary only)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading input from disk failed (native binary only)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Achievement Drift operations
pub type Result<T> = std::result::Result<T, DriftError>;
