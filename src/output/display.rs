//! Display functions for command results

use super::formatters::{create_progress_bar, format_millis, numbered_list, percentage, separator};
use crate::commands::BenchmarkResult;
use crate::core::SearchResult;
use colored::Colorize;
use std::time::Duration;

/// Clear the screen and print the application banner
pub fn print_header() {
    // ANSI: clear screen, cursor home
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", separator('=').blue().bold());
    println!(
        "{}",
        "                DICTIONARY SEARCH APPLICATION"
            .yellow()
            .bold()
    );
    println!("{}", separator('=').blue().bold());
    println!(
        "{}",
        "This application allows you to search for words in a dictionary"
            .bright_black()
            .italic()
    );
    println!(
        "{}",
        "and provides suggestions for misspelled words."
            .bright_black()
            .italic()
    );
    println!();
}

pub fn print_initializing() {
    println!("{}", "Initializing dictionary...".cyan());
}

/// Report a finished dictionary build
pub fn print_initialized(word_count: usize, elapsed: Duration) {
    println!(
        "{} {}",
        format!("Dictionary initialized with {word_count} words.").green(),
        format!("({})", format_millis(elapsed)).bright_black()
    );
    println!("{}", separator('-').blue());
}

pub fn print_searching(query: &str) {
    println!("{}", separator('-').blue());
    println!("{}", format!("Searching for: \"{query}\"...").cyan());
}

/// Print the outcome of one search and how long it took
pub fn print_search_result(result: &SearchResult, elapsed: Duration) {
    if result.found {
        println!("{}", format!("✓ {}", result.message).green().bold());
    } else {
        println!("{}", format!("✗ {}", result.message).red().bold());

        let suggestions = result.suggestions();
        if !suggestions.is_empty() {
            println!("{}", "Did you mean:".yellow());
            for line in numbered_list(suggestions) {
                println!("{}", line.yellow());
            }
        }
    }

    println!(
        "{}",
        format!("\nSearch completed in {}", format_millis(elapsed)).bright_black()
    );
    println!("{}", separator('-').blue());
}

pub fn print_goodbye() {
    println!(
        "{}",
        "Thank you for using the Dictionary Search Application!".green()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", separator('═').cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", separator('═').cyan());

    println!("\n📊 {}", "Queries:".bright_cyan().bold());
    println!("   Seed:               {}", result.seed);
    println!("   Misspellings:       {}", result.total_queries);
    print_rate_line("Exact hits:", result.found, result.total_queries);
    print_rate_line("With suggestions:", result.with_suggestions, result.total_queries);
    print_rate_line("Original suggested:", result.original_suggested, result.total_queries);

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!(
        "   Average search:     {}",
        format_millis(result.average_search_time).bright_yellow().bold()
    );
    println!(
        "   Slowest search:     {}",
        format_millis(result.slowest_search).yellow()
    );
    println!("   Time taken:         {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:    {:.1}", result.searches_per_second);
}

fn print_rate_line(label: &str, count: usize, total: usize) {
    let pct = percentage(count, total);
    let bar = create_progress_bar(pct, 100.0, 30);
    println!(
        "   {label:<20}{} {count:5} ({pct:5.1}%)",
        bar.green()
    );
}
