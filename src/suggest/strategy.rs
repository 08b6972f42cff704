//! Candidate selection strategies
//!
//! Defines the `SuggestionStrategy` trait and the two concrete strategies.

use crate::core::levenshtein_distance;

/// A strategy for picking alternatives to a query from the vocabulary
pub trait SuggestionStrategy {
    /// Select candidates for `query` from `vocabulary`, best first
    ///
    /// Matching ignores case, but the returned strings are the stored
    /// spellings. A word equal to the query (ignoring case) is never returned.
    fn suggest<'a>(&self, query: &str, vocabulary: &'a [String]) -> Vec<&'a str>;
}

/// Words sharing the first half of the query
///
/// The prefix is `max(1, ceil(len / 2))` characters long. Matches are returned
/// in vocabulary order, not re-ranked.
#[derive(Debug, Clone, Copy)]
pub struct PrefixStrategy {
    pub max_matches: usize,
}

impl PrefixStrategy {
    /// Length of the prefix compared for a query of `len` characters
    #[inline]
    #[must_use]
    pub const fn prefix_length(len: usize) -> usize {
        let half = len.div_ceil(2);
        if half > 1 { half } else { 1 }
    }
}

impl SuggestionStrategy for PrefixStrategy {
    fn suggest<'a>(&self, query: &str, vocabulary: &'a [String]) -> Vec<&'a str> {
        if query.is_empty() {
            return Vec::new();
        }

        let query = query.to_lowercase();
        let prefix: String = query
            .chars()
            .take(Self::prefix_length(query.chars().count()))
            .collect();

        vocabulary
            .iter()
            .filter(|word| {
                let folded = word.to_lowercase();
                folded.starts_with(&prefix) && folded != query
            })
            .take(self.max_matches)
            .map(String::as_str)
            .collect()
    }
}

/// A vocabulary word paired with its distance from the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<'a> {
    pub word: &'a str,
    pub distance: usize,
}

/// Words within a bounded Levenshtein distance of the query
///
/// Ranked by distance, then by word length. Remaining ties keep vocabulary
/// order.
#[derive(Debug, Clone, Copy)]
pub struct EditDistanceStrategy {
    pub max_distance: usize,
    pub max_matches: usize,
}

impl EditDistanceStrategy {
    /// Score every vocabulary word within range, ranked
    #[must_use]
    pub fn score<'a>(&self, query: &str, vocabulary: &'a [String]) -> Vec<ScoredCandidate<'a>> {
        if query.is_empty() {
            return Vec::new();
        }

        let query = query.to_lowercase();
        let query_len = query.chars().count();

        let mut scored: Vec<ScoredCandidate<'a>> = vocabulary
            .iter()
            .filter_map(|word| {
                let folded = word.to_lowercase();
                if folded == query {
                    return None;
                }

                // Distance is at least the length difference
                if folded.chars().count().abs_diff(query_len) > self.max_distance {
                    return None;
                }

                let distance = levenshtein_distance(&query, &folded);
                (distance <= self.max_distance).then_some(ScoredCandidate {
                    word: word.as_str(),
                    distance,
                })
            })
            .collect();

        // Stable sort keeps vocabulary order for full ties
        scored.sort_by_key(|c| (c.distance, c.word.chars().count()));
        scored
    }
}

impl SuggestionStrategy for EditDistanceStrategy {
    fn suggest<'a>(&self, query: &str, vocabulary: &'a [String]) -> Vec<&'a str> {
        self.score(query, vocabulary)
            .into_iter()
            .take(self.max_matches)
            .map(|c| c.word)
            .collect()
    }
}
