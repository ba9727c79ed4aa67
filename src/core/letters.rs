//! Letter bags and anagram keys
//!
//! Two words are anagrams exactly when their keys are equal: the key is the
//! word's letters sorted into ascending order, so it encodes both which
//! letters appear and how many times.

use super::{InvalidQuery, fold_case};
use rustc_hash::FxHashMap;
use std::fmt;

/// Canonical form of a letter multiset
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnagramKey(String);

impl AnagramKey {
    /// Build a key from any sequence of letters
    ///
    /// # Examples
    /// ```
    /// use crossword_helper::core::AnagramKey;
    ///
    /// let a = AnagramKey::from_letters("least".chars());
    /// let b = AnagramKey::from_letters("tales".chars());
    /// assert_eq!(a, b);
    /// assert_eq!(a.as_str(), "aelst");
    /// ```
    #[must_use]
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Self {
        let mut chars: Vec<char> = letters.into_iter().collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnagramKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The letters supplied for an anagram query
///
/// Holds the letters in input order plus the precomputed key. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBag {
    letters: String,
    len: usize,
    key: AnagramKey,
}

impl LetterBag {
    /// Parse raw anagram input
    ///
    /// Only alphabetic characters survive; everything else (spaces,
    /// punctuation, digits) is dropped silently. Letters are lowercased.
    ///
    /// # Errors
    /// Returns `InvalidQuery::NoLetters` if no letter is left.
    ///
    /// # Examples
    /// ```
    /// use crossword_helper::core::LetterBag;
    ///
    /// let bag = LetterBag::parse("u q s o t e n i").unwrap();
    /// assert_eq!(bag.len(), 8);
    /// assert_eq!(bag.letters(), "uqsoteni");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, InvalidQuery> {
        let letters: String = raw
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(fold_case)
            .collect();

        if letters.is_empty() {
            return Err(InvalidQuery::NoLetters);
        }

        let len = letters.chars().count();
        let key = AnagramKey::from_letters(letters.chars());
        Ok(Self { letters, len, key })
    }

    /// The letters in the order they were given
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Total number of letters, counting repeats
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: parsing rejects empty bags
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn key(&self) -> &AnagramKey {
        &self.key
    }

    /// Count of each distinct letter
    #[must_use]
    pub fn counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for ch in self.letters.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}

impl std::str::FromStr for LetterBag {
    type Err = InvalidQuery;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
