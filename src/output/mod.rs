//! Terminal output formatting
//!
//! Column layout and printing for search results.

pub mod display;
pub mod formatters;

pub use display::print_search_result;
pub use formatters::format_columns;
