//! Log classifier: turn raw log text into a `DiagnosisResult`.

use fh_protocol::{DiagnosisResult, FaultCategory};

use crate::error::LogResult;
use crate::patterns::{self, NO_ERROR_ROOT_CAUSE, NO_ERROR_STEPS};
use crate::source::LogSource;
use crate::text::{split_lines, trim_line};

/// Confidence reported when the log has no error lines.
pub const NO_ERROR_CONFIDENCE: u8 = 45;

/// Characters of the last error line quoted in the root cause.
const ROOT_CAUSE_EXCERPT_CHARS: usize = 120;

/// Classify log text.
///
/// Pure and deterministic: the same text always yields the same result.
pub fn classify(text: &str) -> DiagnosisResult {
    let error_lines: Vec<&str> = split_lines(text)
        .into_iter()
        .filter(|line| patterns::is_error_line(line))
        .collect();

    let Some(last_error) = error_lines.last() else {
        tracing::debug!("no error lines found");
        return no_error_result();
    };

    let mut counts = [0usize; FaultCategory::ALL.len()];
    for line in &error_lines {
        counts[patterns::detect_category(line).index()] += 1;
    }

    let (dominant, dominant_count) = dominant_category(&counts);
    let last_error = trim_line(last_error);
    let excerpt: String = last_error.chars().take(ROOT_CAUSE_EXCERPT_CHARS).collect();

    tracing::debug!(
        error_lines = error_lines.len(),
        category = %dominant,
        count = dominant_count,
        "log classified"
    );

    DiagnosisResult {
        root_cause: format!(
            "{} issue detected based on '{excerpt}'",
            dominant.title()
        ),
        reproduction_steps: patterns::reproduction_steps(dominant, last_error),
        suggested_fix: patterns::suggested_fix(dominant).to_string(),
        confidence: confidence_for(dominant_count),
        category: dominant,
    }
}

/// Read a log through `source` and classify it.
///
/// A missing path surfaces as `LogError::NotFound`, unmodified.
pub async fn analyze_file(source: &dyn LogSource, path: &str) -> LogResult<DiagnosisResult> {
    let text = source.read_text(path).await?;
    tracing::info!(path, bytes = text.len(), "analyzing log file");
    Ok(classify(&text))
}

/// Highest count wins; on a tie the category declared first wins.
fn dominant_category(counts: &[usize; FaultCategory::ALL.len()]) -> (FaultCategory, usize) {
    let mut best = (FaultCategory::ALL[0], counts[0]);
    for category in FaultCategory::ALL.into_iter().skip(1) {
        let count = counts[category.index()];
        if count > best.1 {
            best = (category, count);
        }
    }
    best
}

fn confidence_for(count: usize) -> u8 {
    let score = 60usize.saturating_add(count.saturating_mul(5)).min(99);
    score as u8
}

fn no_error_result() -> DiagnosisResult {
    DiagnosisResult {
        root_cause: NO_ERROR_ROOT_CAUSE.to_string(),
        reproduction_steps: NO_ERROR_STEPS.iter().map(|s| s.to_string()).collect(),
        suggested_fix: patterns::suggested_fix(FaultCategory::Generic).to_string(),
        confidence: NO_ERROR_CONFIDENCE,
        category: FaultCategory::Generic,
    }
}
