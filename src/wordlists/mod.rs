//! Word lists for lookups
//!
//! The dictionary is read fresh from a newline-delimited file on every run.

pub mod loader;

/// System word list used when no other path is given
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";
