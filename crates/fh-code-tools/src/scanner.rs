//! Scan entry points: combine all rules and the quick-fix pass.

use fh_log_tools::text::decode_lossy;
use fh_protocol::CodeCorrection;

use crate::error::{CodeError, CodeResult};
use crate::fixes::apply_quick_fixes;
use crate::python::python_findings;
use crate::rules::{dangerous_calls, malloc_without_free};

/// Scan source text and return findings plus the quick-fixed source.
///
/// Findings are ordered: allocation check, per-line unsafe calls, then
/// Python checks.
pub fn correct_code(code: &str) -> CodeResult<CodeCorrection> {
    let mut corrections = Vec::new();
    corrections.extend(malloc_without_free(code));
    corrections.extend(dangerous_calls(code));
    corrections.extend(python_findings(code)?);

    let fixed_code = apply_quick_fixes(code);
    tracing::debug!(issues = corrections.len(), "code scanned");

    Ok(CodeCorrection {
        issues_found: corrections.len(),
        corrections,
        fixed_code,
    })
}

/// Read a source file (invalid UTF-8 dropped) and scan it.
pub async fn correct_file(path: &str) -> CodeResult<CodeCorrection> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CodeError::NotFound(path.to_string())
        } else {
            CodeError::Io(format!("{path}: {e}"))
        }
    })?;
    tracing::info!(path, bytes = bytes.len(), "scanning code file");
    correct_code(&decode_lossy(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const C_SAMPLE: &str = "#include <stdio.h>\n\
int main(void) {\n\
    char *buf = malloc(32);\n\
    gets(buf);\n\
    sprintf(buf, \"%d\", 42);\n\
    return 0;\n\
}\n";

    #[test]
    fn c_source_report() {
        let report = correct_code(C_SAMPLE).unwrap();
        assert_eq!(report.issues_found, 3);
        assert_eq!(report.corrections[0].line, 0);
        assert_eq!(report.corrections[1].line, 4);
        assert_eq!(report.corrections[1].issue, "Unsafe call to gets detected");
        assert_eq!(report.corrections[2].line, 5);
        assert!(report.fixed_code.contains("fgets(buf);"));
        assert!(report.fixed_code.contains("snprintf(buf,"));
        assert!(!report.fixed_code.contains(" gets("));
    }

    #[test]
    fn python_source_report() {
        let code = "import os\n\ntry:\n    value = eval(os.environ['X'])\nexcept:\n    value = None\n";
        let report = correct_code(code).unwrap();
        assert_eq!(report.issues_found, 2);
        let issues: Vec<&str> = report.corrections.iter().map(|c| c.issue.as_str()).collect();
        assert!(issues.contains(&"Bare except detected"));
        assert!(issues.contains(&"Use of eval() is unsafe"));
        assert_eq!(report.fixed_code, code);
    }

    #[test]
    fn clean_source_has_no_findings() {
        let report = correct_code("def add(a, b):\n    return a + b\n").unwrap();
        assert_eq!(report.issues_found, 0);
        assert!(report.corrections.is_empty());
    }

    #[test]
    fn issue_count_matches_corrections() {
        let report = correct_code("strcpy(a, b); strcpy(c, d);\nmemcpy(x, y, 1);").unwrap();
        assert_eq!(report.issues_found, report.corrections.len());
        assert_eq!(report.issues_found, 2);
    }

    #[tokio::test]
    async fn correct_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"strcpy(dst, src);\n\xff").unwrap();
        let report = correct_file(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(report.issues_found, 1);
        assert_eq!(report.fixed_code, "strncpy(dst, src);\n");
    }

    #[tokio::test]
    async fn correct_file_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.c");
        let err = correct_file(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, CodeError::NotFound(_)));
    }
}
