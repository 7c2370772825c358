//! Known-issue corpus loading.

use std::path::Path;

use fh_protocol::KnownIssue;

use crate::error::{IssueError, IssueResult};

/// Corpus used when no JSONL file is available.
pub fn builtin_corpus() -> Vec<KnownIssue> {
    [
        ("FW-1001", "Bootloader panic after OTA package validation"),
        ("FW-1020", "Memory leak during TLS handshake on ARM targets"),
        ("FW-1103", "Watchdog reset triggered while mounting filesystem"),
    ]
    .into_iter()
    .map(|(id, summary)| KnownIssue {
        id: id.into(),
        summary: summary.into(),
    })
    .collect()
}

/// Parse newline-delimited JSON, one `{"id", "summary"}` object per line.
///
/// Blank lines are skipped; any other malformed line is an error.
pub fn parse_jsonl(content: &str) -> IssueResult<Vec<KnownIssue>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| IssueError::Corpus {
                line: i + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Load the corpus from `path`, falling back to the built-in set when the
/// path is unset or does not exist.
pub async fn load_corpus(path: Option<&Path>) -> IssueResult<Vec<KnownIssue>> {
    let Some(path) = path else {
        return Ok(builtin_corpus());
    };

    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let issues = parse_jsonl(&content)?;
            tracing::info!(path = %path.display(), count = issues.len(), "known issues loaded");
            Ok(issues)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "known-issue file missing, using built-in corpus");
            Ok(builtin_corpus())
        }
        Err(e) => Err(IssueError::Io(format!("{}: {e}", path.display()))),
    }
}
