//! Benchmark command
//!
//! Times searches over generated misspellings of vocabulary words.

use crate::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: Option<u64>,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub seed: u64,
    pub total_queries: usize,
    pub found: usize,
    pub with_suggestions: usize,
    pub original_suggested: usize,
    pub duration: Duration,
    pub average_search_time: Duration,
    pub slowest_search: Duration,
    pub searches_per_second: f64,
}

/// A generated query and the vocabulary word it was derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub original: String,
    pub query: String,
}

/// Apply one random edit to `word`
///
/// Inserts, deletes or substitutes a lowercase ASCII letter. Words of one
/// character or fewer only get insertions, so the result is never empty.
pub fn misspell<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let op = if chars.len() <= 1 {
        0
    } else {
        rng.random_range(0..3)
    };

    match op {
        0 => {
            let at = rng.random_range(0..=chars.len());
            chars.insert(at, random_letter(rng));
        }
        1 => {
            chars.remove(rng.random_range(0..chars.len()));
        }
        _ => {
            let at = rng.random_range(0..chars.len());
            let mut letter = random_letter(rng);
            if letter == chars[at] {
                letter = if letter == 'z' { 'a' } else { (letter as u8 + 1) as char };
            }
            chars[at] = letter;
        }
    }

    chars.into_iter().collect()
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'a' + rng.random_range(0..26u8))
}

/// Pick `count` vocabulary words at random and misspell each
pub fn generate_misspellings<R: Rng + ?Sized>(
    words: &[String],
    count: usize,
    rng: &mut R,
) -> Vec<Misspelling> {
    let mut misspellings = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(original) = words.choose(rng) else {
            break;
        };
        misspellings.push(Misspelling {
            query: misspell(original, rng),
            original: original.clone(),
        });
    }

    misspellings
}

/// Run the benchmark, searching all queries in parallel
///
/// The dictionary is read-only, so searches share it without locking.
pub fn run_benchmark(dictionary: &Dictionary, config: &BenchmarkConfig) -> BenchmarkResult {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let queries = generate_misspellings(dictionary.index().words(), config.count, &mut rng);

    println!("🎯 Searching {} misspellings...", queries.len());

    let pb = ProgressBar::new(queries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let timings: Vec<(bool, bool, bool, Duration)> = queries
        .par_iter()
        .map(|misspelling| {
            let search_start = Instant::now();
            let result = dictionary.search(&misspelling.query);
            let elapsed = search_start.elapsed();
            pb.inc(1);

            let suggestions = result.suggestions();
            (
                result.found,
                !suggestions.is_empty(),
                suggestions
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(&misspelling.original)),
                elapsed,
            )
        })
        .collect();
    let duration = start.elapsed();

    pb.finish_with_message("Complete!");

    let total_queries = timings.len();
    let found = timings.iter().filter(|t| t.0).count();
    let with_suggestions = timings.iter().filter(|t| t.1).count();
    let original_suggested = timings.iter().filter(|t| t.2).count();
    let total_search_time: Duration = timings.iter().map(|t| t.3).sum();
    let slowest_search = timings.iter().map(|t| t.3).max().unwrap_or_default();

    let average_search_time = if total_queries == 0 {
        Duration::ZERO
    } else {
        total_search_time / total_queries as u32
    };
    let searches_per_second = if duration.is_zero() {
        0.0
    } else {
        total_queries as f64 / duration.as_secs_f64()
    };

    BenchmarkResult {
        seed,
        total_queries,
        found,
        with_suggestions,
        original_suggested,
        duration,
        average_search_time,
        slowest_search,
        searches_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::levenshtein_distance;
    use crate::wordlists::VOCABULARY;

    #[test]
    fn misspelling_is_one_edit_away() {
        let mut rng = StdRng::seed_from_u64(7);

        for word in ["apple", "dictionary", "ab", "a", ""] {
            for _ in 0..50 {
                let typo = misspell(word, &mut rng);
                assert_eq!(levenshtein_distance(word, &typo), 1, "{word} -> {typo}");
            }
        }
    }

    #[test]
    fn misspellings_are_reproducible() {
        let words: Vec<String> = VOCABULARY.iter().map(ToString::to_string).collect();

        let first = generate_misspellings(&words, 20, &mut StdRng::seed_from_u64(42));
        let second = generate_misspellings(&words, 20, &mut StdRng::seed_from_u64(42));

        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
        assert!(first.iter().all(|m| words.contains(&m.original)));
    }

    #[test]
    fn empty_vocabulary_generates_nothing() {
        let words: Vec<String> = Vec::new();
        let queries = generate_misspellings(&words, 10, &mut StdRng::seed_from_u64(1));
        assert!(queries.is_empty());
    }

    #[test]
    fn benchmark_counts_are_consistent() {
        let dictionary = Dictionary::build(VOCABULARY.iter().copied());
        let result = run_benchmark(&dictionary, &BenchmarkConfig::new(40).with_seed(3));

        assert_eq!(result.seed, 3);
        assert_eq!(result.total_queries, 40);
        assert!(result.found <= result.total_queries);
        assert!(result.original_suggested <= result.with_suggestions);
        assert!(result.with_suggestions + result.found <= result.total_queries);
        assert!(result.slowest_search >= result.average_search_time);
    }

    #[test]
    fn benchmark_empty_dictionary() {
        let dictionary = Dictionary::build(Vec::<String>::new());
        let result = run_benchmark(&dictionary, &BenchmarkConfig::new(10).with_seed(1));

        assert_eq!(result.total_queries, 0);
        assert_eq!(result.average_search_time, Duration::ZERO);
    }
}
