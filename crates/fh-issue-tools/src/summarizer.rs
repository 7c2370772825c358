//! Summarizers: turn a bug description into a short summary.

use async_trait::async_trait;

use crate::error::IssueResult;

/// Trait for engines that condense a bug description.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> IssueResult<String>;

    /// Tier name (for logging).
    fn name(&self) -> &str;
}

/// Local extractive summarizer: the first sentence, capped in length.
pub struct ExtractiveSummarizer {
    max_words: usize,
}

impl ExtractiveSummarizer {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new(40)
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn summarize(&self, text: &str) -> IssueResult<String> {
        let mut words = Vec::new();
        for word in text.split_whitespace() {
            words.push(word);
            if words.len() >= self.max_words || word.ends_with(['.', '!', '?']) {
                break;
            }
        }
        Ok(words.join(" "))
    }

    fn name(&self) -> &str {
        "extractive"
    }
}

/// Tries the primary (model) summarizer and falls back on any error.
pub struct TieredSummarizer {
    primary: Box<dyn Summarizer>,
    fallback: Box<dyn Summarizer>,
}

impl TieredSummarizer {
    pub fn new(primary: Box<dyn Summarizer>, fallback: Box<dyn Summarizer>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl Summarizer for TieredSummarizer {
    async fn summarize(&self, text: &str) -> IssueResult<String> {
        match self.primary.summarize(text).await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                tracing::warn!(
                    tier = self.primary.name(),
                    error = %e,
                    "summarizer failed, falling back"
                );
                self.fallback.summarize(text).await
            }
        }
    }

    fn name(&self) -> &str {
        "tiered"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueError;

    /// Mock summarizer that always returns a fixed result (or fails).
    struct MockSummarizer {
        result: Option<&'static str>,
    }

    #[async_trait]
    impl Summarizer for MockSummarizer {
        async fn summarize(&self, _text: &str) -> IssueResult<String> {
            self.result
                .map(String::from)
                .ok_or_else(|| IssueError::Model("offline".into()))
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn extractive_takes_first_sentence() {
        let summary = ExtractiveSummarizer::default()
            .summarize("Device  reboots after OTA.\nLogs show a watchdog reset. Happens daily.")
            .await
            .unwrap();
        assert_eq!(summary, "Device reboots after OTA.");
    }

    #[tokio::test]
    async fn extractive_caps_word_count() {
        let summary = ExtractiveSummarizer::new(3)
            .summarize("one two three four five")
            .await
            .unwrap();
        assert_eq!(summary, "one two three");
    }

    #[tokio::test]
    async fn extractive_empty_input() {
        let summary = ExtractiveSummarizer::default().summarize("  \n ").await.unwrap();
        assert!(summary.is_empty());
    }

    #[tokio::test]
    async fn tiered_prefers_primary() {
        let tiered = TieredSummarizer::new(
            Box::new(MockSummarizer { result: Some("model summary") }),
            Box::new(ExtractiveSummarizer::default()),
        );
        assert_eq!(tiered.summarize("text.").await.unwrap(), "model summary");
    }

    #[tokio::test]
    async fn tiered_falls_back_on_error() {
        let tiered = TieredSummarizer::new(
            Box::new(MockSummarizer { result: None }),
            Box::new(ExtractiveSummarizer::default()),
        );
        assert_eq!(
            tiered.summarize("Flash write fails. Again.").await.unwrap(),
            "Flash write fails."
        );
    }
}
