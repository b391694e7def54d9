//! Character classification for palindrome normalization
//!
//! Only ASCII letters and digits participate in palindrome comparison;
//! everything else (punctuation, whitespace, non-ASCII) is excluded.

/// A character's role in palindrome normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII letter (compared case-insensitively)
    Letter,
    /// ASCII digit
    Digit,
    /// Does not participate in palindrome comparison
    Excluded,
}

/// Classify a character by its lower-cased code point against the fixed
/// `[a-z]` and `[0-9]` ranges.
pub fn classify(ch: char) -> CharClass {
    match ch.to_ascii_lowercase() {
        'a'..='z' => CharClass::Letter,
        '0'..='9' => CharClass::Digit,
        _ => CharClass::Excluded,
    }
}

/// Check if a character contributes to a word's normalized form.
pub fn is_palindrome_char(ch: char) -> bool {
    classify(ch) != CharClass::Excluded
}

/// The normalized (lower-cased) form of a character, or `None` if the
/// character is excluded from comparison.
pub fn normalize(ch: char) -> Option<char> {
    let lowered = ch.to_ascii_lowercase();
    match lowered {
        'a'..='z' | '0'..='9' => Some(lowered),
        _ => None,
    }
}
