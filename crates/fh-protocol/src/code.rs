use serde::{Deserialize, Serialize};

/// One unsafe pattern found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// 1-based line number; 0 for whole-file findings.
    pub line: usize,
    pub issue: String,
    pub fix: String,
}

/// Scan report plus the source with quick-fixes applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeCorrection {
    pub issues_found: usize,
    pub corrections: Vec<Correction>,
    pub fixed_code: String,
}
