//! Word list loading utilities
//!
//! Reads newline-delimited word lists into a `Dictionary`.

use crate::core::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Each line is one candidate word. Lines that are not purely alphabetic
/// after trimming (blank lines, phrases, possessives) are skipped. Invalid
/// UTF-8 is replaced rather than rejected, so those lines are skipped too.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use crossword_helper::wordlists::{DEFAULT_DICTIONARY, loader::load_from_file};
///
/// let dict = load_from_file(DEFAULT_DICTIONARY).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let dictionary = dictionary_from_str(&String::from_utf8_lossy(&bytes));

    log::debug!(
        "Loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Build a dictionary from newline-delimited text
///
/// # Examples
/// ```
/// use crossword_helper::wordlists::loader::dictionary_from_str;
///
/// let dict = dictionary_from_str("cat\nDog\n\nice cream\n");
/// assert_eq!(dict.len(), 2);
/// ```
#[must_use]
pub fn dictionary_from_str(content: &str) -> Dictionary {
    Dictionary::from_words(content.lines())
}
