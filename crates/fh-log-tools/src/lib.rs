//! Firmware log classification.
//!
//! Picks the error-bearing lines out of a log, assigns each a fault
//! category (memory, io, network, boot or generic), and turns the dominant
//! category into a `DiagnosisResult` with reproduction steps and fix advice.
//! Log text comes from a `LogSource` so files and in-memory fixtures are
//! interchangeable.

pub mod classifier;
pub mod error;
pub mod mock;
pub mod patterns;
pub mod source;
pub mod text;

// Re-export key types for convenience
pub use classifier::{analyze_file, classify};
pub use error::{LogError, LogResult};
pub use mock::MockLogSource;
pub use source::{FileLogSource, LogSource};
