//! Textual quick-fixes for unsafe C calls.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// (pattern, replacement) applied in order over the whole source.
///
/// Word boundaries keep `fgets(`, `strncpy(` and `snprintf(` untouched.
static QUICK_FIXES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\bgets\(", "fgets("),
        (r"\bstrcpy\(", "strncpy("),
        (r"\bsprintf\(", "snprintf("),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("quick-fix pattern must compile"),
            replacement,
        )
    })
    .collect()
});

/// Rewrite unsafe calls to their bounded counterparts.
///
/// Only the call name changes; arguments are left for the developer.
pub fn apply_quick_fixes(code: &str) -> String {
    let mut fixed = code.to_string();
    for (regex, replacement) in QUICK_FIXES.iter() {
        fixed = regex.replace_all(&fixed, NoExpand(*replacement)).into_owned();
    }
    fixed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_unsafe_calls() {
        let code = "gets(buf);\nstrcpy(dst, src);\nsprintf(out, \"%s\", s);\n";
        assert_eq!(
            apply_quick_fixes(code),
            "fgets(buf);\nstrncpy(dst, src);\nsnprintf(out, \"%s\", s);\n"
        );
    }

    #[test]
    fn leaves_safe_calls_alone() {
        let code = "fgets(buf, n, f); strncpy(a, b, n); snprintf(o, n, \"x\");";
        assert_eq!(apply_quick_fixes(code), code);
    }

    #[test]
    fn memcpy_is_not_rewritten() {
        assert_eq!(apply_quick_fixes("memcpy(a, b, n);"), "memcpy(a, b, n);");
    }

    #[test]
    fn code_without_unsafe_calls_is_unchanged() {
        let code = "def main():\n    print('hi')\n";
        assert_eq!(apply_quick_fixes(code), code);
    }
}
