//! Code scanner error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodeError {
    #[error("code file not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("parser setup failed: {0}")]
    Parser(String),
}

/// Convenience alias for code scanner results.
pub type CodeResult<T> = Result<T, CodeError>;
