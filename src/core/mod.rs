//! Core domain types for word lookup
//!
//! This module contains the fundamental domain types and query normalization.
//! Everything here is pure and operates on in-memory data only.

mod dictionary;
mod letters;
mod pattern;
mod query;
mod word;

pub use dictionary::Dictionary;
pub use letters::{AnagramKey, LetterBag};
pub use pattern::{Cell, Pattern};
pub use query::{InvalidQuery, QueryMode, normalize};
pub use word::{Word, WordError};

use word::fold_case;
