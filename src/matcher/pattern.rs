//! Fill-in-the-blank search

use crate::core::{Dictionary, Pattern, Word};

/// Find every dictionary word that fits `pattern`
///
/// Only words of the pattern's length are scanned. Results are sorted
/// alphabetically; duplicates in the dictionary are kept.
///
/// # Examples
/// ```
/// use crossword_helper::core::{Dictionary, Pattern};
/// use crossword_helper::matcher::find_by_pattern;
///
/// let dict = Dictionary::from_words(["cat", "cut", "cot", "dog"]);
/// let pattern = Pattern::parse("c?t").unwrap();
/// let found: Vec<&str> = find_by_pattern(&pattern, &dict).into_iter().map(|w| w.text()).collect();
/// assert_eq!(found, ["cat", "cot", "cut"]);
/// ```
#[must_use]
pub fn find_by_pattern<'a>(pattern: &Pattern, dictionary: &'a Dictionary) -> Vec<&'a Word> {
    let mut matches: Vec<&Word> = dictionary
        .words_of_length(pattern.len())
        .filter(|word| pattern.matches(word))
        .collect();

    matches.sort_by(|a, b| a.text().cmp(b.text()));
    matches
}
