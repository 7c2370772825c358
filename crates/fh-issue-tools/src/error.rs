//! Issue triage error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IssueError {
    #[error("invalid known-issue entry on line {line}: {message}")]
    Corpus { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("model request failed: {0}")]
    Model(String),
}

/// Convenience alias for issue triage results.
pub type IssueResult<T> = Result<T, IssueError>;
