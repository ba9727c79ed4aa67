//! Dictionary word representation
//!
//! A Word is a non-empty, lowercase, purely alphabetic string.

use super::AnagramKey;
use std::fmt;

/// A validated dictionary word
///
/// Stores the lowercase text and its length in characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAlphabetic(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAlphabetic(ch) => write!(f, "Word contains non-letter character {ch:?}"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use crossword_helper::core::Word;
    ///
    /// let word = Word::new("Slate").unwrap();
    /// assert_eq!(word.text(), "slate");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("can't").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if let Some(bad) = trimmed.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::NonAlphabetic(bad));
        }

        let text: String = trimmed.chars().flat_map(fold_case).collect();
        let len = text.chars().count();
        if len == 0 {
            return Err(WordError::Empty);
        }

        Ok(Self { text, len })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the word in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: a Word holds at least one letter
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the letters of the word
    #[inline]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    /// Canonical letter-multiset key for this word
    #[must_use]
    pub fn anagram_key(&self) -> AnagramKey {
        AnagramKey::from_letters(self.chars())
    }
}

/// Lowercase a letter, keeping only the letters of its lowercase form
///
/// Some uppercase letters lowercase to a letter plus a combining mark
/// ('İ' becomes "i\u{307}"); the mark is dropped so folded text stays
/// purely alphabetic.
pub(crate) fn fold_case(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase().filter(|c| c.is_alphabetic())
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
