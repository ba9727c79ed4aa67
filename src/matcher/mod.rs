//! Word matching algorithms
//!
//! Both matchers scan only the dictionary's words of the right length and
//! return borrowed words in alphabetical order.

mod anagram;
mod pattern;

pub use anagram::find_anagrams;
pub use pattern::find_by_pattern;
