//! Palindromic word classification
//!
//! A word is palindromic when its normalized form (ASCII letters and digits
//! only, lower-cased) reads the same front-to-back and back-to-front, and is
//! non-empty. Punctuation and mixed case are transparent: `"Madam"` and
//! `"Mad,am"` normalize identically.

use crate::chars;

/// Check if a word is a palindrome under the normalization rule.
///
/// Scans the word from both ends simultaneously, building a front
/// accumulator (valid characters front-to-back) and a back accumulator
/// (valid characters back-to-front). Each side scans the whole word, so the
/// pointers do not stop at the middle. A word with no valid characters at
/// all (empty, or punctuation only) is never palindromic.
pub fn is_palindromic_word(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let mut front = String::new();
    let mut back = String::new();

    for i in 0..chars.len() {
        let front_char = chars[i];
        let back_char = chars[chars.len() - 1 - i];

        if let Some(normalized) = chars::normalize(front_char) {
            front.push(normalized);
        }
        if let Some(normalized) = chars::normalize(back_char) {
            back.push(normalized);
        }
    }

    if front.is_empty() {
        return false;
    }

    front == back
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_palindromes() {
        assert!(is_palindromic_word("madam"));
        assert!(is_palindromic_word("wow"));
        assert!(is_palindromic_word("Bob"));
        assert!(is_palindromic_word("a"));
    }

    #[test]
    fn test_non_palindromes() {
        assert!(!is_palindromic_word("hello"));
        assert!(!is_palindromic_word("man"));
        assert!(!is_palindromic_word("plan"));
        assert!(!is_palindromic_word("canal"));
        assert!(!is_palindromic_word("Panama"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_palindromic_word("Madam"));
        assert!(is_palindromic_word("MADAM"));
        assert!(is_palindromic_word("mAdAm"));
    }

    #[test]
    fn test_punctuation_excluded() {
        assert!(is_palindromic_word("madam,"));
        assert!(is_palindromic_word("Mad,am"));
        assert!(is_palindromic_word("!wow!"));
    }

    #[test]
    fn test_numeric_words() {
        assert!(is_palindromic_word("1221"));
        assert!(is_palindromic_word("7"));
        assert!(!is_palindromic_word("1231"));
    }

    #[test]
    fn test_mixed_letters_and_digits() {
        assert!(is_palindromic_word("a1a"));
        assert!(!is_palindromic_word("a1b"));
    }

    #[test]
    fn test_empty_and_all_invalid_never_palindromic() {
        assert!(!is_palindromic_word(""));
        assert!(!is_palindromic_word(",,,"));
        assert!(!is_palindromic_word("!?"));
    }

    #[test]
    fn test_invariant_under_case_change() {
        for word in ["madam", "hello", "Mad,am", "1221", ",,,", "Panama"] {
            assert_eq!(
                is_palindromic_word(word),
                is_palindromic_word(&word.to_uppercase()),
                "case invariance for {word:?}"
            );
        }
    }
}
