//! Command implementations

pub mod search;

pub use search::{Mode, SearchResult, search};
