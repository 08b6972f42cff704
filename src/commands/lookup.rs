//! One-shot lookup command
//!
//! Searches each word given on the command line once.

use crate::Dictionary;
use crate::core::SearchResult;
use crate::output::{print_search_result, print_searching};
use std::time::Instant;

/// Search and print every word in `words`, returning the results in order
pub fn run_lookup<S: AsRef<str>>(dictionary: &Dictionary, words: &[S]) -> Vec<SearchResult> {
    words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            print_searching(word);

            let start = Instant::now();
            let result = dictionary.search(word);
            print_search_result(&result, start.elapsed());

            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchOutcome;

    #[test]
    fn results_follow_input_order() {
        let dictionary = Dictionary::build(["cat", "dog"]);
        let results = run_lookup(&dictionary, &["dog", "zzz", "", "CAT"]);

        let outcomes: Vec<SearchOutcome> = results.iter().map(SearchResult::outcome).collect();
        assert_eq!(
            outcomes,
            [
                SearchOutcome::Found,
                SearchOutcome::NotFound,
                SearchOutcome::InvalidQuery,
                SearchOutcome::Found,
            ]
        );
        assert_eq!(results[3].word.as_deref(), Some("cat"));
    }

    #[test]
    fn no_words_no_results() {
        let dictionary = Dictionary::build(["cat"]);
        let words: [String; 0] = [];
        assert!(run_lookup(&dictionary, &words).is_empty());
    }
}
