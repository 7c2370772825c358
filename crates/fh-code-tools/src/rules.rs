//! Line-level rules: unsafe C calls and unpaired allocations.

use fh_protocol::Correction;
use regex::Regex;
use std::sync::LazyLock;

use fh_log_tools::text::split_lines;

struct DangerousCall {
    name: &'static str,
    regex: Regex,
    fix: &'static str,
}

impl DangerousCall {
    fn new(name: &'static str, fix: &'static str) -> Self {
        Self {
            name,
            regex: Regex::new(&format!(r"\b{name}\s*\(")).expect("call pattern must compile"),
            fix,
        }
    }
}

/// Checked per line in this order.
static DANGEROUS_CALLS: LazyLock<Vec<DangerousCall>> = LazyLock::new(|| {
    vec![
        DangerousCall::new(
            "gets",
            "Replace gets() with fgets() or getline() to avoid buffer overflow.",
        ),
        DangerousCall::new(
            "strcpy",
            "Use strncpy or strlcpy with explicit buffer length.",
        ),
        DangerousCall::new(
            "sprintf",
            "Switch to snprintf and limit the destination buffer.",
        ),
        DangerousCall::new(
            "memcpy",
            "Validate destination buffer size before calling memcpy.",
        ),
    ]
});

/// Whole-file check: `malloc` appears somewhere but `free` never does.
///
/// Plain substring test, so `free` inside an identifier or comment counts.
pub fn malloc_without_free(code: &str) -> Option<Correction> {
    if code.contains("malloc") && !code.contains("free") {
        return Some(Correction {
            line: 0,
            issue: "malloc detected without matching free()".into(),
            fix: "Ensure every allocation is paired with a free() before returning.".into(),
        });
    }
    None
}

/// One finding per (line, call) pair, in line order then table order.
pub fn dangerous_calls(code: &str) -> Vec<Correction> {
    let mut findings = Vec::new();
    for (idx, line) in split_lines(code).into_iter().enumerate() {
        for call in DANGEROUS_CALLS.iter() {
            if call.regex.is_match(line) {
                findings.push(Correction {
                    line: idx + 1,
                    issue: format!("Unsafe call to {} detected", call.name),
                    fix: call.fix.to_string(),
                });
            }
        }
    }
    findings
}
