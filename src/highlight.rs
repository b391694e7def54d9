//! Line highlighting
//!
//! Walks a line's plain text, segments it into words on the space character,
//! and reassembles the line as markup with every palindromic word wrapped in
//! the highlight marker. Inter-word spacing is preserved: runs of spaces
//! survive as runs of empty words, and an empty word is never palindromic.

use crate::palindrome::is_palindromic_word;
use crate::sanitize::LogicalLine;

/// Markup emitted for a blank line, so the visual line break survives
/// rendering instead of being stripped.
pub const SPACER: &str = "<br>";

/// One line of the mirror's rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLine {
    pub markup: String,
}

impl HighlightedLine {
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn is_spacer(&self) -> bool {
        self.markup == SPACER
    }
}

/// The wrapper applied to a palindromic word's boundaries.
///
/// The CSS class is a rendering convention of the host page; only the class
/// name is configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMarker {
    class: String,
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self::new("highlight")
    }
}

impl HighlightMarker {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Wrap a word's boundaries in the highlight span.
    pub fn wrap(&self, word: &str) -> String {
        format!("<span class=\"{}\">{}</span>", self.class, word)
    }
}

/// Highlight one line.
///
/// A blank line returns the [`SPACER`] untouched; word segmentation never
/// runs on it, so the empty line cannot be corrupted into visible
/// whitespace. Any other line is scanned in a single pass: characters
/// accumulate into the current word until a space or end of text completes
/// it, at which point the word is classified and conditionally wrapped.
/// End of text triggers the same completion, so a one-word line with no
/// trailing space is handled.
pub fn highlight_line(line: &LogicalLine, marker: &HighlightMarker) -> HighlightedLine {
    if line.is_blank() {
        return HighlightedLine {
            markup: SPACER.to_string(),
        };
    }

    let text = line.as_str();
    let mut markup = String::with_capacity(text.len());
    let mut word = String::new();

    for ch in text.chars() {
        if ch == ' ' {
            push_word(&mut markup, &word, marker);
            markup.push(' ');
            word.clear();
        } else {
            word.push(ch);
        }
    }
    push_word(&mut markup, &word, marker);

    HighlightedLine { markup }
}

fn push_word(markup: &mut String, word: &str, marker: &HighlightMarker) {
    if is_palindromic_word(word) {
        markup.push_str(&marker.wrap(word));
    } else {
        markup.push_str(word);
    }
}

/// Highlight every line of a content snapshot.
pub fn highlight_content(lines: &[LogicalLine], marker: &HighlightMarker) -> Vec<HighlightedLine> {
    lines
        .iter()
        .map(|line| highlight_line(line, marker))
        .collect()
}
