//! Interactive prompt mode
//!
//! Reads one query per line until `exit` or end of input.

use crate::Dictionary;
use crate::output::{print_goodbye, print_search_result, print_searching};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

const PROMPT: &str = "Enter a word to search (or \"exit\" to quit): ";

/// Counts gathered over one interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub searches: usize,
    pub found: usize,
}

/// Run the interactive prompt over `input`
///
/// Each line is searched as typed, minus its line ending. The session ends on
/// `exit` (any case) or end of input.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_interactive<R: BufRead>(dictionary: &Dictionary, mut input: R) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut line = String::new();

    loop {
        print!("{}", PROMPT.yellow());
        io::stdout().flush().context("failed to flush prompt")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read query")?;
        if read == 0 {
            println!();
            break;
        }

        let query = line.trim_end_matches(['\r', '\n']);
        if query.eq_ignore_ascii_case("exit") {
            break;
        }

        print_searching(query);
        let start = Instant::now();
        let result = dictionary.search(query);
        print_search_result(&result, start.elapsed());

        summary.searches += 1;
        if result.found {
            summary.found += 1;
        }
    }

    print_goodbye();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::build(["apple", "apply", "ample", "orange"])
    }

    #[test]
    fn stops_at_exit() {
        let input = Cursor::new("apple\nappli\nEXIT\norange\n");
        let summary = run_interactive(&dictionary(), input).unwrap();

        assert_eq!(summary, SessionSummary { searches: 2, found: 1 });
    }

    #[test]
    fn stops_at_end_of_input() {
        let input = Cursor::new("orange\r\nApple");
        let summary = run_interactive(&dictionary(), input).unwrap();

        assert_eq!(summary, SessionSummary { searches: 2, found: 2 });
    }

    #[test]
    fn empty_line_is_searched_as_invalid() {
        let input = Cursor::new("\nexit\n");
        let summary = run_interactive(&dictionary(), input).unwrap();

        assert_eq!(summary, SessionSummary { searches: 1, found: 0 });
    }

    #[test]
    fn empty_input_searches_nothing() {
        let summary = run_interactive(&dictionary(), Cursor::new("")).unwrap();
        assert_eq!(summary, SessionSummary::default());
    }
}
