//! Error types for the conformance harness

use core_types::RuntimeError;
use thiserror::Error;

/// Errors that abort a conformance run
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// A scenario raised an error it did not handle
    #[error("{}: {0}", .0.kind())]
    Runtime(#[from] RuntimeError),

    /// Reading or writing a report file failed
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing or parsing a report failed
    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for harness operations
pub type ConformanceResult<T> = Result<T, ConformanceError>;
