//! Bug-report triage.
//!
//! Summarizes a free-text bug description and ranks a corpus of known
//! issues by embedding similarity to that summary. Summarization and
//! embedding sit behind the `Summarizer` and `Embedder` traits with two
//! tiers each:
//! - **Local**: extractive summary and hashed bag-of-words vectors, no
//!   model required.
//! - **Ollama**: HTTP calls to a model server for both.

pub mod analyzer;
pub mod corpus;
pub mod embedder;
pub mod error;
pub mod ollama;
pub mod summarizer;

pub use analyzer::IssueAnalyzer;
pub use embedder::{Embedder, HashingEmbedder};
pub use error::{IssueError, IssueResult};
pub use ollama::{OllamaConfig, OllamaEmbedder, OllamaSummarizer};
pub use summarizer::{ExtractiveSummarizer, Summarizer, TieredSummarizer};
