//! Fill-in-the-blank pattern representation
//!
//! A pattern is a fixed-length row of cells. Each cell is either a known
//! letter or a wildcard that stands for exactly one unknown letter:
//! - `?` or `*` = Wildcard
//! - any letter = Literal (stored lowercase)
//!
//! The pattern length is the required word length.

use super::{InvalidQuery, Word, fold_case};
use std::fmt;

/// One position in a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The word must have exactly this letter here
    Literal(char),
    /// Any single letter
    Wildcard,
}

impl Cell {
    /// Whether `ch` is allowed in this cell
    #[inline]
    #[must_use]
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::Literal(letter) => letter == ch,
            Self::Wildcard => true,
        }
    }
}

/// A normalized fill-in-the-blank pattern
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Cell>,
}

impl Pattern {
    /// Parse a raw pattern string
    ///
    /// Whitespace is removed and letters are lowercased.
    ///
    /// # Errors
    /// Returns `InvalidQuery` if:
    /// - Nothing is left after removing whitespace
    /// - A character is neither a letter nor `?`/`*`
    ///
    /// # Examples
    /// ```
    /// use crossword_helper::core::{Cell, Pattern};
    ///
    /// let pattern = Pattern::parse("C?t").unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(pattern.cells()[0], Cell::Literal('c'));
    /// assert_eq!(pattern.cells()[1], Cell::Wildcard);
    ///
    /// assert!(Pattern::parse("").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, InvalidQuery> {
        let mut cells = Vec::with_capacity(raw.len());

        for ch in raw.chars().filter(|c| !c.is_whitespace()) {
            match ch {
                '?' | '*' => cells.push(Cell::Wildcard),
                c if c.is_alphabetic() => cells.extend(fold_case(c).map(Cell::Literal)),
                other => return Err(InvalidQuery::UnexpectedCharacter(other)),
            }
        }

        if cells.is_empty() {
            return Err(InvalidQuery::EmptyPattern);
        }

        Ok(Self { cells })
    }

    /// The cells of the pattern in order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, which is also the length every match must have
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: parsing rejects empty patterns
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of known-letter cells
    #[must_use]
    pub fn literal_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Literal(_)))
            .count()
    }

    /// Check whether `word` fits this pattern
    ///
    /// # Examples
    /// ```
    /// use crossword_helper::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::parse("?u??t???").unwrap();
    /// assert!(pattern.matches(&Word::new("question").unwrap()));
    /// assert!(!pattern.matches(&Word::new("quotient").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .cells
                .iter()
                .zip(word.chars())
                .all(|(cell, ch)| cell.accepts(ch))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Cell::Literal(ch) => write!(f, "{ch}")?,
                Cell::Wildcard => write!(f, "?")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = InvalidQuery;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn parse_mixed_pattern() {
        let pattern = Pattern::parse("?u??t???").unwrap();
        assert_eq!(pattern.len(), 8);
        assert_eq!(pattern.literal_count(), 2);
        assert_eq!(pattern.cells()[1], Cell::Literal('u'));
        assert_eq!(pattern.cells()[4], Cell::Literal('t'));
    }

    #[test]
    fn parse_star_and_question_are_equivalent() {
        assert_eq!(Pattern::parse("c*t").unwrap(), Pattern::parse("c?t").unwrap());
    }

    #[test]
    fn parse_uppercase_normalized() {
        assert_eq!(Pattern::parse("CAT").unwrap(), Pattern::parse("cat").unwrap());
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(Pattern::parse(""), Err(InvalidQuery::EmptyPattern));
        assert_eq!(Pattern::parse(" \t "), Err(InvalidQuery::EmptyPattern));
        assert_eq!(
            Pattern::parse("c3t"),
            Err(InvalidQuery::UnexpectedCharacter('3'))
        );
    }

    #[test]
    fn matches_requires_equal_length() {
        let pattern = Pattern::parse("???").unwrap();
        assert!(pattern.matches(&word("dog")));
        assert!(!pattern.matches(&word("do")));
        assert!(!pattern.matches(&word("dogs")));
    }

    #[test]
    fn matches_checks_literal_positions() {
        let pattern = Pattern::parse("c?t").unwrap();
        assert!(pattern.matches(&word("cat")));
        assert!(pattern.matches(&word("cut")));
        assert!(!pattern.matches(&word("cab")));
        assert!(!pattern.matches(&word("act")));
    }

    #[test]
    fn matches_all_literal() {
        let pattern = Pattern::parse("dog").unwrap();
        assert!(pattern.matches(&word("dog")));
        assert!(!pattern.matches(&word("dig")));
    }

    #[test]
    fn matches_non_ascii_letters() {
        let pattern = Pattern::parse("caf?").unwrap();
        assert!(pattern.matches(&word("café")));
    }

    #[test]
    fn parse_folds_dotted_capital_i() {
        let pattern = Pattern::parse("İ?").unwrap();
        assert_eq!(pattern.cells(), [Cell::Literal('i'), Cell::Wildcard]);
        assert!(pattern.matches(&word("is")));
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(Pattern::parse("Q * ?z").unwrap().to_string(), "q??z");
    }
}
