//! In-memory dictionary with a length index
//!
//! Words keep the order and multiplicity of their source. The length index
//! lets both matchers skip every word of the wrong length without touching it.

use super::Word;
use rustc_hash::FxHashMap;

/// An immutable, ordered collection of dictionary words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    by_length: FxHashMap<usize, Vec<usize>>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (index, word) in words.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(index);
        }

        Self { words, by_length }
    }

    /// Build a dictionary from raw strings, skipping anything that is not a word
    ///
    /// # Examples
    /// ```
    /// use crossword_helper::core::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["Cat", "dog", "o'clock", ""]);
    /// assert_eq!(dict.len(), 2);
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            words
                .into_iter()
                .filter_map(|s| Word::new(s).ok())
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in source order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Words with exactly `len` letters, in source order
    pub fn words_of_length(&self, len: usize) -> impl Iterator<Item = &Word> + '_ {
        self.by_length
            .get(&len)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&index| &self.words[index])
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
