//! Issue analyzer: summarize a report, then rank known issues against it.

use fh_protocol::{IssueAnalysis, KnownIssue, SimilarIssue};

use crate::embedder::{Embedder, cosine_similarity};
use crate::error::{IssueError, IssueResult};
use crate::summarizer::Summarizer;

/// Number of similar issues returned (fewer if the corpus is smaller).
pub const DEFAULT_TOP_K: usize = 3;

/// Known-issue matcher with precomputed corpus embeddings.
pub struct IssueAnalyzer {
    corpus: Vec<KnownIssue>,
    corpus_embeddings: Vec<Vec<f32>>,
    summarizer: Box<dyn Summarizer>,
    embedder: Box<dyn Embedder>,
    top_k: usize,
}

impl IssueAnalyzer {
    /// Embed the whole corpus up front with `embedder`.
    ///
    /// Queries are embedded with the same embedder, so vectors stay
    /// comparable for the analyzer's lifetime.
    pub async fn new(
        corpus: Vec<KnownIssue>,
        summarizer: Box<dyn Summarizer>,
        embedder: Box<dyn Embedder>,
    ) -> IssueResult<Self> {
        let summaries: Vec<String> = corpus.iter().map(|i| i.summary.clone()).collect();
        let corpus_embeddings = embedder.embed(&summaries).await?;
        if corpus_embeddings.len() != corpus.len() {
            return Err(IssueError::Model(format!(
                "embedded {} of {} known issues",
                corpus_embeddings.len(),
                corpus.len()
            )));
        }

        tracing::info!(
            issues = corpus.len(),
            summarizer = summarizer.name(),
            embedder = embedder.name(),
            "issue analyzer ready"
        );

        Ok(Self {
            corpus,
            corpus_embeddings,
            summarizer,
            embedder,
            top_k: DEFAULT_TOP_K,
        })
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    /// Summarize `description` and return the closest known issues.
    pub async fn analyze(&self, description: &str) -> IssueResult<IssueAnalysis> {
        let summary = self.summarizer.summarize(description).await?;

        let query = self
            .embedder
            .embed(std::slice::from_ref(&summary))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| IssueError::Model("no embedding returned for summary".into()))?;

        let mut scored: Vec<(usize, f32)> = self
            .corpus_embeddings
            .iter()
            .enumerate()
            .map(|(i, emb)| (i, cosine_similarity(&query, emb)))
            .collect();
        // Stable sort: equal scores keep corpus order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.top_k);

        let similar_issues = scored
            .into_iter()
            .map(|(i, score)| SimilarIssue {
                id: self.corpus[i].id.clone(),
                title: self.corpus[i].summary.clone(),
                similarity: as_percentage(score),
            })
            .collect::<Vec<_>>();

        tracing::debug!(summary = %summary, matches = similar_issues.len(), "issue analyzed");

        Ok(IssueAnalysis {
            summary,
            similar_issues,
        })
    }
}

/// Score as a percentage rounded to two decimals.
fn as_percentage(score: f32) -> f64 {
    (f64::from(score) * 100.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::builtin_corpus;
    use crate::embedder::HashingEmbedder;
    use crate::summarizer::ExtractiveSummarizer;
    use async_trait::async_trait;

    /// Embeds by looking the text up in a fixed table; unknown texts map
    /// to the first axis.
    struct TableEmbedder(Vec<(&'static str, Vec<f32>)>);

    #[async_trait]
    impl Embedder for TableEmbedder {
        async fn embed(&self, texts: &[String]) -> IssueResult<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|t| {
                    self.0
                        .iter()
                        .find(|(k, _)| *k == t.as_str())
                        .map(|(_, v)| v.clone())
                        .unwrap_or_else(|| vec![1.0, 0.0])
                })
                .collect())
        }

        fn name(&self) -> &str {
            "table"
        }
    }

    fn issue(id: &str, summary: &str) -> KnownIssue {
        KnownIssue {
            id: id.into(),
            summary: summary.into(),
        }
    }

    async fn local_analyzer() -> IssueAnalyzer {
        IssueAnalyzer::new(
            builtin_corpus(),
            Box::new(ExtractiveSummarizer::default()),
            Box::new(HashingEmbedder::default()),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn returns_all_three_builtin_issues_ranked() {
        let analyzer = local_analyzer().await;
        let analysis = analyzer
            .analyze("Watchdog reset triggered while mounting the data filesystem. Seen on rev B.")
            .await
            .unwrap();

        assert_eq!(
            analysis.summary,
            "Watchdog reset triggered while mounting the data filesystem."
        );
        assert_eq!(analysis.similar_issues.len(), 3);
        assert_eq!(analysis.similar_issues[0].id, "FW-1103");
        let scores: Vec<f64> = analysis.similar_issues.iter().map(|s| s.similarity).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn similarity_is_percentage_with_two_decimals() {
        let analyzer = IssueAnalyzer::new(
            vec![issue("A", "alpha"), issue("B", "beta")],
            Box::new(ExtractiveSummarizer::default()),
            Box::new(TableEmbedder(vec![
                ("alpha", vec![1.0, 0.0]),
                ("beta", vec![0.6, 0.8]),
                ("query", vec![1.0, 0.0]),
            ])),
        )
        .await
        .unwrap();

        let analysis = analyzer.analyze("query").await.unwrap();
        assert_eq!(analysis.similar_issues[0].id, "A");
        assert_eq!(analysis.similar_issues[0].similarity, 100.0);
        assert_eq!(analysis.similar_issues[1].id, "B");
        assert_eq!(analysis.similar_issues[1].similarity, 60.0);
        assert_eq!(analysis.similar_issues[1].title, "beta");
    }

    #[tokio::test]
    async fn ties_keep_corpus_order() {
        let analyzer = IssueAnalyzer::new(
            vec![issue("X", "x"), issue("Y", "y"), issue("Z", "z")],
            Box::new(ExtractiveSummarizer::default()),
            Box::new(TableEmbedder(vec![("z", vec![0.0, 1.0])])),
        )
        .await
        .unwrap()
        .with_top_k(2);

        let analysis = analyzer.analyze("anything").await.unwrap();
        let ids: Vec<&str> = analysis.similar_issues.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["X", "Y"]);
    }

    #[tokio::test]
    async fn small_corpus_limits_results() {
        let analyzer = IssueAnalyzer::new(
            vec![issue("FW-1", "Flash erase fails")],
            Box::new(ExtractiveSummarizer::default()),
            Box::new(HashingEmbedder::default()),
        )
        .await
        .unwrap();
        let analysis = analyzer.analyze("flash erase fails").await.unwrap();
        assert_eq!(analysis.similar_issues.len(), 1);
        assert_eq!(analyzer.corpus_len(), 1);
    }

    #[tokio::test]
    async fn empty_corpus_yields_no_matches() {
        let analyzer = IssueAnalyzer::new(
            Vec::new(),
            Box::new(ExtractiveSummarizer::default()),
            Box::new(HashingEmbedder::default()),
        )
        .await
        .unwrap();
        let analysis = analyzer.analyze("anything").await.unwrap();
        assert!(analysis.similar_issues.is_empty());
    }

    #[test]
    fn percentage_rounding() {
        assert_eq!(as_percentage(0.123456), 12.35);
        assert_eq!(as_percentage(1.0), 100.0);
        assert_eq!(as_percentage(0.0), 0.0);
    }
}
