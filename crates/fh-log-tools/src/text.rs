//! Text helpers shared by the log and code scanners.

/// Decode bytes as UTF-8, dropping any invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Whitespace for trimming: Unicode whitespace plus the information
/// separators `\x1c`..=`\x1f`.
fn is_trim_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip leading and trailing whitespace, separators included.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_trim_space)
}

/// Characters that end a line.
///
/// Besides `\n` and `\r` this includes vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators. `\r\n` counts as a single break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines without their terminators.
///
/// A trailing terminator does not produce a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                end = j + 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_drops_invalid_bytes() {
        let bytes = b"kernel \xff\xfepanic\n";
        assert_eq!(decode_lossy(bytes), "kernel panic\n");
    }

    #[test]
    fn decode_keeps_valid_multibyte() {
        assert_eq!(decode_lossy("température".as_bytes()), "température");
    }

    #[test]
    fn split_mixed_terminators() {
        let lines = split_lines("a\nb\r\nc\rd");
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn split_trailing_newline_has_no_empty_tail() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn split_keeps_interior_empty_lines() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn split_unicode_separators() {
        assert_eq!(split_lines("a\u{2028}b\u{0c}c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn trim_strips_unit_separator() {
        assert_eq!(trim_line(" \terror: boom\u{1f} \u{1c}"), "error: boom");
        assert_eq!(trim_line("a\u{1f}b"), "a\u{1f}b");
        assert_eq!(trim_line("\u{a0}x\u{3000}"), "x");
    }

    #[test]
    fn split_empty_text() {
        assert!(split_lines("").is_empty());
    }
}
