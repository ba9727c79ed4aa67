//! Word search command
//!
//! Normalizes one query and runs it against a dictionary.

use crate::core::{Dictionary, InvalidQuery, LetterBag, Pattern, Word};
use crate::matcher::{find_anagrams, find_by_pattern};
use std::fmt;

/// How the query string should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Pattern with `?`/`*` for unknown letters
    #[default]
    FillBlanks,
    /// Letters to rearrange into a single word
    Anagram,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FillBlanks => write!(f, "fill-blanks"),
            Self::Anagram => write!(f, "anagram"),
        }
    }
}

/// Result of a search
pub struct SearchResult<'a> {
    pub mode: Mode,
    /// The query in canonical form
    pub query: String,
    /// Matching words in alphabetical order
    pub matches: Vec<&'a Word>,
}

impl SearchResult<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.matches.iter().map(|word| word.text()).collect()
    }
}

/// Run a single query against the dictionary
///
/// # Errors
///
/// Returns `InvalidQuery` if the query is empty after normalization, or if a
/// pattern contains characters other than letters and wildcards.
///
/// # Examples
/// ```
/// use crossword_helper::commands::{Mode, search};
/// use crossword_helper::core::Dictionary;
///
/// let dict = Dictionary::from_words(["ab", "aabb", "baba"]);
/// let result = search(Mode::Anagram, "aabb", &dict).unwrap();
/// assert_eq!(result.texts(), ["aabb", "baba"]);
/// ```
pub fn search<'a>(
    mode: Mode,
    raw_query: &str,
    dictionary: &'a Dictionary,
) -> Result<SearchResult<'a>, InvalidQuery> {
    let (query, matches) = match mode {
        Mode::FillBlanks => {
            let pattern = Pattern::parse(raw_query)?;
            log::debug!(
                "Pattern {pattern}: {} letters, {} known",
                pattern.len(),
                pattern.literal_count()
            );
            (pattern.to_string(), find_by_pattern(&pattern, dictionary))
        }
        Mode::Anagram => {
            let bag = LetterBag::parse(raw_query)?;
            log::debug!("Letter bag {bag}: key {}", bag.key());
            (bag.to_string(), find_anagrams(&bag, dictionary))
        }
    };

    log::debug!(
        "{mode} search for {query:?} matched {} of {} words",
        matches.len(),
        dictionary.len()
    );

    Ok(SearchResult {
        mode,
        query,
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::dictionary_from_str;

    fn dict() -> Dictionary {
        dictionary_from_str("cat\ncut\ncot\ndog\nact\nquestion\nduration\nquotient\n")
    }

    #[test]
    fn fill_blanks_is_default_mode() {
        assert_eq!(Mode::default(), Mode::FillBlanks);
    }

    #[test]
    fn fill_blanks_search() {
        let dict = dict();
        let result = search(Mode::FillBlanks, "C*T", &dict).unwrap();
        assert_eq!(result.query, "c?t");
        assert_eq!(result.texts(), ["cat", "cot", "cut"]);
    }

    #[test]
    fn anagram_search_ignores_spaces() {
        let dict = dict();
        let result = search(Mode::Anagram, "t a c", &dict).unwrap();
        assert_eq!(result.query, "tac");
        assert_eq!(result.texts(), ["act", "cat"]);
    }

    #[test]
    fn anagram_search_question() {
        let dict = dict();
        let result = search(Mode::Anagram, "u q s o t e n i", &dict).unwrap();
        assert_eq!(result.texts(), ["question"]);
    }

    #[test]
    fn no_matches_is_not_an_error() {
        let dict = dict();
        let result = search(Mode::FillBlanks, "zz?", &dict).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn empty_dictionary_both_modes() {
        let dict = Dictionary::default();
        assert!(search(Mode::FillBlanks, "???", &dict).unwrap().is_empty());
        assert!(search(Mode::Anagram, "abc", &dict).unwrap().is_empty());
    }

    #[test]
    fn invalid_queries_are_reported() {
        let dict = dict();
        assert!(matches!(
            search(Mode::FillBlanks, "  ", &dict),
            Err(InvalidQuery::EmptyPattern)
        ));
        assert!(matches!(
            search(Mode::Anagram, "123", &dict),
            Err(InvalidQuery::NoLetters)
        ));
    }
}
