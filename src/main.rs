//! Dictionary Search - CLI
//!
//! Interactive dictionary lookup with spelling suggestions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dictionary_search::{
    Dictionary,
    commands::{BenchmarkConfig, run_benchmark, run_interactive, run_lookup},
    output::{print_benchmark_result, print_header, print_initialized, print_initializing},
    suggest::SuggestionConfig,
    wordlists::{VOCABULARY, loader},
};
use std::io;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "dictionary_search",
    about = "Look up words in a dictionary and get suggestions for misspellings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Maximum number of suggestions per miss
    #[arg(long, global = true, default_value_t = 5)]
    max_suggestions: usize,

    /// Maximum edit distance for suggestions (0-2)
    #[arg(long, global = true, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=2))]
    max_distance: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt (default)
    Interactive,

    /// Search the given words once each
    Lookup {
        /// Words to search
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Time searches over random misspellings of dictionary words
    Benchmark {
        /// Number of misspellings to search
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Random seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "builtin" => Ok(loader::words_from_slice(VOCABULARY)),
        path => loader::load_from_file(path)
            .with_context(|| format!("could not load vocabulary from '{path}'")),
    }
}

/// Build the dictionary, reporting progress on stdout
fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    print_initializing();

    let words = load_vocabulary(&cli.wordlist)?;
    let config = SuggestionConfig::new()
        .with_max_suggestions(cli.max_suggestions)
        .with_max_edit_distance(usize::from(cli.max_distance));

    let start = Instant::now();
    let dictionary = Dictionary::with_config(words, config);
    print_initialized(dictionary.len(), start.elapsed());

    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to interactive mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Interactive) {
        Commands::Interactive => {
            print_header();
            let dictionary = load_dictionary(&cli)?;
            run_interactive(&dictionary, io::stdin().lock())?;
        }
        Commands::Lookup { words } => {
            let dictionary = load_dictionary(&cli)?;
            run_lookup(&dictionary, words.as_slice());
        }
        Commands::Benchmark { count, seed } => {
            let dictionary = load_dictionary(&cli)?;
            let mut config = BenchmarkConfig::new(*count);
            if let Some(seed) = seed {
                config = config.with_seed(*seed);
            }
            let result = run_benchmark(&dictionary, &config);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
