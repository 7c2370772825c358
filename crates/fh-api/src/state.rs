//! Shared application state for the Axum server.
//!
//! Log and code analysis are stateless; the only shared piece is the
//! issue analyzer with its precomputed known-issue embeddings.

use std::sync::Arc;

use fh_issue_tools::corpus::{builtin_corpus, load_corpus};
use fh_issue_tools::{
    Embedder, ExtractiveSummarizer, HashingEmbedder, IssueAnalyzer, IssueResult, OllamaConfig,
    OllamaEmbedder, OllamaSummarizer, Summarizer, TieredSummarizer,
};

use crate::config::ApiConfig;

/// Shared application state, cheap to clone into handlers.
#[derive(Clone)]
pub struct AppState {
    pub issues: Arc<IssueAnalyzer>,
}

impl AppState {
    pub fn new(issues: IssueAnalyzer) -> Self {
        Self {
            issues: Arc::new(issues),
        }
    }

    /// Built-in corpus with local summarizer and embedder (tests and
    /// development).
    pub async fn local() -> IssueResult<Self> {
        let analyzer = IssueAnalyzer::new(
            builtin_corpus(),
            Box::new(ExtractiveSummarizer::default()),
            Box::new(HashingEmbedder::default()),
        )
        .await?;
        Ok(Self::new(analyzer))
    }

    /// Build state from config.
    ///
    /// With Ollama enabled, summaries come from the model with a local
    /// fallback, and the model embedder is used if it can embed the corpus
    /// at startup; otherwise the hashing embedder is used for everything.
    pub async fn from_config(config: &ApiConfig) -> IssueResult<Self> {
        let corpus = load_corpus(config.known_issues_path.as_deref()).await?;

        if config.ollama.enabled {
            let embedder: Box<dyn Embedder> = Box::new(OllamaEmbedder::new(config.ollama.clone())?);
            match IssueAnalyzer::new(corpus.clone(), summarizer(&config.ollama)?, embedder).await {
                Ok(analyzer) => return Ok(Self::new(analyzer)),
                Err(e) => {
                    tracing::warn!(error = %e, "model embedder unavailable, using hashing embedder");
                }
            }
        }

        let analyzer = IssueAnalyzer::new(
            corpus,
            summarizer(&config.ollama)?,
            Box::new(HashingEmbedder::default()),
        )
        .await?;
        Ok(Self::new(analyzer))
    }
}

fn summarizer(config: &OllamaConfig) -> IssueResult<Box<dyn Summarizer>> {
    if !config.enabled {
        return Ok(Box::new(ExtractiveSummarizer::default()));
    }
    Ok(Box::new(TieredSummarizer::new(
        Box::new(OllamaSummarizer::new(config.clone())?),
        Box::new(ExtractiveSummarizer::default()),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_state_has_builtin_corpus() {
        let state = AppState::local().await.unwrap();
        assert_eq!(state.issues.corpus_len(), 3);
    }

    #[tokio::test]
    async fn unreachable_model_falls_back_to_local() {
        let mut config = ApiConfig::default();
        config.ollama.enabled = true;
        config.ollama.host = "http://127.0.0.1:9".into();
        config.ollama.timeout_secs = 1;

        let state = AppState::from_config(&config).await.unwrap();
        assert_eq!(state.issues.corpus_len(), 3);

        // Summaries fall back to the extractive tier.
        let analysis = state.issues.analyze("Flash fails. Twice.").await.unwrap();
        assert_eq!(analysis.summary, "Flash fails.");
    }
}
