use serde::{Deserialize, Serialize};

/// An entry in the known-issue corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownIssue {
    /// Tracker key (e.g., "FW-1001").
    pub id: String,
    /// One-line summary used for similarity search.
    pub summary: String,
}

/// A known issue ranked against a new report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarIssue {
    pub id: String,
    /// Summary of the known issue.
    pub title: String,
    /// Cosine similarity as a percentage, rounded to two decimals.
    pub similarity: f64,
}

/// Result of summarizing a bug report and matching it to known issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueAnalysis {
    pub summary: String,
    /// Most similar known issues, best first.
    pub similar_issues: Vec<SimilarIssue>,
}
