//! Display functions for command results

use super::formatters::format_columns;
use crate::commands::SearchResult;
use colored::Colorize;
use std::io::{self, Write};
use std::num::NonZeroUsize;

/// Print the matches of a search in columns
///
/// Matches go to stdout. When there are none, a short notice is written to
/// stderr instead so piped output stays empty. A reader that closes the
/// pipe early (`| head`) ends output quietly.
///
/// # Errors
///
/// Returns an error if writing to stdout fails for any reason other than a
/// closed pipe.
pub fn print_search_result(result: &SearchResult<'_>, columns: NonZeroUsize) -> io::Result<()> {
    if result.is_empty() {
        eprintln!(
            "{} {}",
            format!("No {} matches for", result.mode).yellow(),
            result.query.bold()
        );
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, &format_columns(&result.texts(), columns))
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    let written = lines
        .iter()
        .try_for_each(|line| writeln!(out, "{line}"))
        .and_then(|()| out.flush());

    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed early: {e}");
            Ok(())
        }
        other => other,
    }
}
