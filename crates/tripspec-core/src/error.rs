//! Error types for the tripspec-core library.
//!
//! Extraction itself never fails; these errors only surface while loading
//! configuration or handling caller-supplied settings.

use thiserror::Error;

/// Main error type for the tripspec library.
#[derive(Error, Debug)]
pub enum TripSpecError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A reference date that is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid reference date: {0}")]
    InvalidReferenceDate(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the tripspec library.
pub type Result<T> = std::result::Result<T, TripSpecError>;
