//! Coarse "does this look like arithmetic?" sniff.
//!
//! This is an allow-list on characters, not a grammar check: `sin(` or `tennis`
//! pass here and are rejected later by the evaluator.

use super::vocabulary::Vocabulary;

/// Operator and punctuation characters admitted besides digits, whitespace, and name letters.
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '(', ')', '.', '^', '%'];

/// True if `s` is non-empty and every character is a digit, whitespace, an operator,
/// or a letter used by some name in `vocabulary`.
pub fn looks_like_math(s: &str, vocabulary: &Vocabulary) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_digit()
                || c.is_whitespace()
                || OPERATOR_CHARS.contains(&c)
                || vocabulary.admits_letter(c)
        })
}
