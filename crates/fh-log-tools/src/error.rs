//! Log acquisition error types.

use thiserror::Error;

/// Errors that can occur while fetching log text.
///
/// Classification itself never fails; only reading the input can.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("log file not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Convenience alias for log results.
pub type LogResult<T> = Result<T, LogError>;
