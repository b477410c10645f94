//! Error types for depmap operations.
//!
//! Expected domain conditions (unknown edge ids, filters that match nothing,
//! capacity eviction) are never errors. Errors only surface at the I/O and
//! configuration boundary.

use std::io;
use thiserror::Error;

/// The error type for depmap operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An imported edge record was rejected.
    #[error("Invalid edge at line {line_number}: {reason}")]
    InvalidEdge {
        /// 1-based line number of the offending record
        line_number: usize,
        /// Why the record was rejected
        reason: String,
    },
}

/// A specialized Result type for depmap operations.
pub type Result<T> = std::result::Result<T, Error>;
