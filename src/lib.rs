//! Crossword Helper
//!
//! Dictionary lookups for crossword solving: fill-in-the-blank pattern search
//! and exact anagram search.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_helper::core::{Dictionary, LetterBag, Pattern};
//! use crossword_helper::matcher::{find_anagrams, find_by_pattern};
//!
//! let dict = Dictionary::from_words(["least", "slate", "stale", "steal", "tales"]);
//!
//! // Known letters in place, `?` or `*` for the blanks
//! let pattern = Pattern::parse("st?le").unwrap();
//! assert_eq!(find_by_pattern(&pattern, &dict).len(), 1);
//!
//! // Every letter used exactly once
//! let bag = LetterBag::parse("e l a s t").unwrap();
//! assert_eq!(find_anagrams(&bag, &dict).len(), 5);
//! ```

// Core domain types
pub mod core;

// Matching algorithms
pub mod matcher;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
