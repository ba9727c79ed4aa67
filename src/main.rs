//! Crossword Helper - CLI
//!
//! Finds dictionary words from a fill-in-the-blank pattern or a bag of letters.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use crossword_helper::{
    commands::{Mode, search},
    output::print_search_result,
    wordlists::{DEFAULT_DICTIONARY, loader::load_from_file},
};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "crossword_helper",
    about = "Crossword helper: fill in the blanks or find exact anagrams",
    version,
    author
)]
struct Cli {
    /// Anagram mode: find words using exactly these letters (spaces ignored)
    #[arg(short = 'a', conflicts_with = "fill")]
    anagram: bool,

    /// Fill-blanks mode (default): '?' or '*' marks each unknown letter
    #[arg(short = 's')]
    fill: bool,

    /// Number of columns in the output
    #[arg(short = 'n', value_name = "COLS", default_value = "5")]
    columns: NonZeroUsize,

    /// Word list to search, one word per line
    #[arg(short = 'w', long, value_name = "PATH", default_value = DEFAULT_DICTIONARY)]
    wordlist: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Pattern or letters; several arguments are joined with spaces
    #[arg(required = true, num_args = 1..)]
    input: Vec<String>,
}

impl Cli {
    const fn mode(&self) -> Mode {
        if self.anagram {
            Mode::Anagram
        } else {
            Mode::FillBlanks
        }
    }
}

/// Set up logging on stderr; `RUST_LOG` takes precedence over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let dictionary = load_from_file(&cli.wordlist)
        .with_context(|| format!("Could not read word list {}", cli.wordlist.display()))?;
    log::info!(
        "Using {} words from {}",
        dictionary.len(),
        cli.wordlist.display()
    );

    let text = cli.input.join(" ");
    let result = search(cli.mode(), &text, &dictionary)?;
    log::info!("{} matches for {}", result.matches.len(), result.query);

    print_search_result(&result, cli.columns)?;
    Ok(())
}
