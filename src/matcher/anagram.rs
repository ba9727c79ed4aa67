//! Exact anagram search

use crate::core::{Dictionary, LetterBag, Word};

/// Find every dictionary word that uses exactly the letters in `bag`
///
/// A match uses every letter of the bag once and no other letters, so
/// subsets and supersets are rejected. Results are sorted alphabetically.
///
/// # Examples
/// ```
/// use crossword_helper::core::{Dictionary, LetterBag};
/// use crossword_helper::matcher::find_anagrams;
///
/// let dict = Dictionary::from_words(["question", "quotient"]);
/// let bag = LetterBag::parse("uqsoteni").unwrap();
/// let found: Vec<&str> = find_anagrams(&bag, &dict).into_iter().map(|w| w.text()).collect();
/// assert_eq!(found, ["question"]);
/// ```
#[must_use]
pub fn find_anagrams<'a>(bag: &LetterBag, dictionary: &'a Dictionary) -> Vec<&'a Word> {
    let key = bag.key();

    let mut matches: Vec<&Word> = dictionary
        .words_of_length(bag.len())
        .filter(|word| word.anagram_key() == *key)
        .collect();

    matches.sort_by(|a, b| a.text().cmp(b.text()));
    matches
}
