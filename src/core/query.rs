//! Query normalization
//!
//! Turns raw user input into the canonical form used by the matchers.

use super::{LetterBag, Pattern};
use std::fmt;

/// Which kind of query a raw string should be normalized as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Fill-in-the-blank pattern (`?` or `*` for unknown letters)
    Pattern,
    /// Bag of letters for an exact anagram
    Anagram,
}

/// Error returned when a query cannot be normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidQuery {
    /// Pattern had no cells after removing whitespace
    EmptyPattern,
    /// Letter bag had no letters after stripping non-letters
    NoLetters,
    /// Pattern contained something other than a letter or wildcard
    UnexpectedCharacter(char),
}

impl fmt::Display for InvalidQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPattern => write!(f, "Pattern must contain at least one letter or wildcard"),
            Self::NoLetters => write!(f, "Anagram input must contain at least one letter"),
            Self::UnexpectedCharacter(ch) => write!(
                f,
                "Pattern may only contain letters and the wildcards '?' or '*', found {ch:?}"
            ),
        }
    }
}

impl std::error::Error for InvalidQuery {}

/// Normalize a raw query into its canonical string form
///
/// Patterns come back lowercase with every wildcard written as `?`.
/// Letter bags come back as their lowercase letters in input order.
/// Normalizing an already-normalized string returns it unchanged.
///
/// # Errors
///
/// Returns `InvalidQuery` if nothing usable is left after normalization,
/// or if a pattern contains a character that is neither a letter nor a wildcard.
///
/// # Examples
/// ```
/// use crossword_helper::core::{QueryMode, normalize};
///
/// assert_eq!(normalize("C * T", QueryMode::Pattern).unwrap(), "c?t");
/// assert_eq!(normalize("e l a s t", QueryMode::Anagram).unwrap(), "elast");
/// ```
pub fn normalize(raw: &str, mode: QueryMode) -> Result<String, InvalidQuery> {
    match mode {
        QueryMode::Pattern => raw.parse::<Pattern>().map(|p| p.to_string()),
        QueryMode::Anagram => raw.parse::<LetterBag>().map(|b| b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_pattern_lowercases_and_unifies_wildcards() {
        assert_eq!(normalize("?U??T***", QueryMode::Pattern).unwrap(), "?u??t???");
    }

    #[test]
    fn normalize_pattern_removes_whitespace() {
        assert_eq!(normalize(" c ? t ", QueryMode::Pattern).unwrap(), "c?t");
    }

    #[test]
    fn normalize_pattern_rejects_empty() {
        assert_eq!(
            normalize("   ", QueryMode::Pattern),
            Err(InvalidQuery::EmptyPattern)
        );
    }

    #[test]
    fn normalize_pattern_rejects_other_characters() {
        assert_eq!(
            normalize("c.t", QueryMode::Pattern),
            Err(InvalidQuery::UnexpectedCharacter('.'))
        );
    }

    #[test]
    fn normalize_anagram_strips_non_letters() {
        assert_eq!(normalize("U q-s,o 7t e n i", QueryMode::Anagram).unwrap(), "uqsoteni");
    }

    #[test]
    fn normalize_anagram_rejects_no_letters() {
        assert_eq!(
            normalize(" 12 - ", QueryMode::Anagram),
            Err(InvalidQuery::NoLetters)
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        for (raw, mode) in [
            ("?U * t", QueryMode::Pattern),
            ("question", QueryMode::Pattern),
            ("A a B b!", QueryMode::Anagram),
            ("İs", QueryMode::Pattern),
            ("İs", QueryMode::Anagram),
            ("ÉTÉ?", QueryMode::Pattern),
        ] {
            let once = normalize(raw, mode).unwrap();
            let twice = normalize(&once, mode).unwrap();
            assert_eq!(once, twice, "normalizing {raw:?} twice changed it");
        }
    }
}
