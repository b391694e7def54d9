//! Paste sanitization
//!
//! Raw pasted text may contain literal markup-significant characters and
//! `&nbsp;` escapes. Sanitizing converts it into logical lines that are safe
//! to embed in the mirror's markup: non-breaking-space escapes collapse to a
//! regular space, structural characters are substituted, and newlines split
//! the text into lines.

use std::fmt;

/// One sanitized, newline-free line of document content.
///
/// An empty line denotes a blank line; it is preserved (rendered as a
/// spacer), never stripped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogicalLine(String);

impl LogicalLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank line renders as a line-break spacer.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for LogicalLine {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for LogicalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Substitution for characters that would otherwise read as structural
/// markup once the line is rendered.
fn substitute(ch: char) -> char {
    match ch {
        '<' => '(',
        '>' => ')',
        '&' => '+',
        other => other,
    }
}

/// Convert raw pasted text into sanitized logical lines.
///
/// Single left-to-right scan:
/// - `&nbsp` and `&nbsp;` both collapse to a single space;
/// - any other `&`, and all `<` / `>`, are substituted via [`substitute`];
/// - `\n` terminates the current line.
///
/// The in-progress line always flushes at end of input, so splitting is
/// newline-delimited: `"a\nb\n"` yields `["a", "b", ""]` and the empty
/// string yields one empty line. Total over any input; an escape fragment
/// that fails to match (`"&nbs"`, `"&x"`) passes through with each character
/// substituted individually.
pub fn sanitize(raw: &str) -> Vec<LogicalLine> {
    let chars: Vec<char> = raw.chars().collect();
    let mut lines = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '\n' {
            lines.push(LogicalLine::new(std::mem::take(&mut buffer)));
            i += 1;
            continue;
        }

        if ch == '&' && chars[i + 1..].starts_with(&['n', 'b', 's', 'p']) {
            buffer.push(' ');
            i += 5;
            // consume the optional terminator too
            if chars.get(i) == Some(&';') {
                i += 1;
            }
            continue;
        }

        buffer.push(substitute(ch));
        i += 1;
    }

    lines.push(LogicalLine::new(buffer));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &str) -> Vec<String> {
        sanitize(raw)
            .into_iter()
            .map(|line| line.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_identity_on_clean_single_line() {
        assert_eq!(lines("hello world"), vec!["hello world"]);
    }

    #[test]
    fn test_empty_input_yields_one_empty_line() {
        assert_eq!(lines(""), vec![""]);
    }

    #[test]
    fn test_newline_delimited_splitting() {
        assert_eq!(lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(lines("a\nb"), vec!["a", "b"]);
        assert_eq!(lines("\n"), vec!["", ""]);
        assert_eq!(lines("\n\n"), vec!["", "", ""]);
    }

    #[test]
    fn test_nbsp_with_terminator() {
        assert_eq!(lines("x&nbsp;y"), vec!["x y"]);
    }

    #[test]
    fn test_nbsp_without_terminator() {
        assert_eq!(lines("x&nbspy"), vec!["x y"]);
    }

    #[test]
    fn test_nbsp_at_end_of_input() {
        assert_eq!(lines("x&nbsp"), vec!["x "]);
        assert_eq!(lines("x&nbsp;"), vec!["x "]);
    }

    #[test]
    fn test_structural_characters_substituted() {
        assert_eq!(lines("<b>&"), vec!["(b)+"]);
        assert_eq!(lines("a < b > c & d"), vec!["a ( b ) c + d"]);
    }

    #[test]
    fn test_unmatched_escape_fragment_passes_through() {
        // "&nbs" does not match, so the `&` is substituted and the rest kept
        assert_eq!(lines("&nbs"), vec!["+nbs"]);
        assert_eq!(lines("&x"), vec!["+x"]);
        assert_eq!(lines("&"), vec!["+"]);
    }

    #[test]
    fn test_consecutive_escapes() {
        assert_eq!(lines("a&nbsp;&nbsp;b"), vec!["a  b"]);
        assert_eq!(lines("&nbsp&nbsp"), vec!["  "]);
    }

    #[test]
    fn test_escape_split_across_lines_does_not_match() {
        // the newline interrupts the lookahead characters themselves
        assert_eq!(lines("&\nnbsp"), vec!["+", "nbsp"]);
    }

    #[test]
    fn test_blank_line_is_blank() {
        let sanitized = sanitize("a\n\nb");
        assert!(!sanitized[0].is_blank());
        assert!(sanitized[1].is_blank());
        assert!(!sanitized[2].is_blank());
    }
}
