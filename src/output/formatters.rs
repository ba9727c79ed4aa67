//! Formatting utilities for terminal output

use std::num::NonZeroUsize;

/// Lay words out in left-justified columns
///
/// Every column is as wide as the longest word plus two spaces. A new line
/// starts after every `columns` words and trailing padding is trimmed.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use crossword_helper::output::formatters::format_columns;
///
/// let lines = format_columns(&["cat", "cot", "cut"], NonZeroUsize::new(2).unwrap());
/// assert_eq!(lines, ["cat  cot", "cut"]);
/// ```
#[must_use]
pub fn format_columns<S: AsRef<str>>(words: &[S], columns: NonZeroUsize) -> Vec<String> {
    let width = words
        .iter()
        .map(|word| word.as_ref().chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    words
        .chunks(columns.get())
        .map(|row| {
            let line: String = row
                .iter()
                .map(|word| format!("{:<width$}", word.as_ref()))
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn empty_input_has_no_lines() {
        let words: [&str; 0] = [];
        assert!(format_columns(&words, cols(5)).is_empty());
    }

    #[test]
    fn single_row_when_fewer_than_columns() {
        assert_eq!(format_columns(&["ab", "abc"], cols(5)), ["ab   abc"]);
    }

    #[test]
    fn wraps_after_column_count() {
        let words = ["least", "slate", "stale", "tales"];
        assert_eq!(
            format_columns(&words, cols(3)),
            ["least  slate  stale", "tales"]
        );
    }

    #[test]
    fn one_column_is_one_word_per_line() {
        assert_eq!(format_columns(&["a", "bb"], cols(1)), ["a", "bb"]);
    }

    #[test]
    fn width_uses_longest_word() {
        let lines = format_columns(&["a", "question", "b"], cols(3));
        assert_eq!(lines, ["a         question  b"]);
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let lines = format_columns(&["café", "cafe"], cols(2));
        assert_eq!(lines, ["café  cafe"]);
    }

    #[test]
    fn accepts_owned_strings() {
        let words = vec![String::from("dog"), String::from("emu")];
        assert_eq!(format_columns(&words, cols(5)), ["dog  emu"]);
    }
}
