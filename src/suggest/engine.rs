//! Suggestion engine
//!
//! Merges prefix matches and edit-distance matches into one short list.

use super::strategy::{EditDistanceStrategy, PrefixStrategy, SuggestionStrategy};
use crate::core::WordIndex;
use rustc_hash::FxHashSet;

/// Limits applied when generating suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionConfig {
    max_suggestions: usize,
    max_prefix_matches: usize,
    max_edit_distance: usize,
}

impl SuggestionConfig {
    /// Largest supported edit distance
    pub const EDIT_DISTANCE_LIMIT: usize = 2;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_suggestions: 5,
            max_prefix_matches: 3,
            max_edit_distance: Self::EDIT_DISTANCE_LIMIT,
        }
    }

    /// Cap on the merged suggestion list
    #[must_use]
    pub const fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Cap on prefix matches
    #[must_use]
    pub const fn with_max_prefix_matches(mut self, max: usize) -> Self {
        self.max_prefix_matches = max;
        self
    }

    /// Edit distance bound, clamped to [`Self::EDIT_DISTANCE_LIMIT`]
    #[must_use]
    pub const fn with_max_edit_distance(mut self, max: usize) -> Self {
        self.max_edit_distance = if max < Self::EDIT_DISTANCE_LIMIT {
            max
        } else {
            Self::EDIT_DISTANCE_LIMIT
        };
        self
    }

    #[inline]
    #[must_use]
    pub const fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    #[inline]
    #[must_use]
    pub const fn max_prefix_matches(&self) -> usize {
        self.max_prefix_matches
    }

    #[inline]
    #[must_use]
    pub const fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Proposes alternatives for words missing from a [`WordIndex`]
///
/// Borrows the index; the stored vocabulary is scanned on every call.
pub struct SuggestionEngine<'a> {
    index: &'a WordIndex,
    config: SuggestionConfig,
    prefix: PrefixStrategy,
    edit_distance: EditDistanceStrategy,
}

impl<'a> SuggestionEngine<'a> {
    #[must_use]
    pub const fn new(index: &'a WordIndex, config: SuggestionConfig) -> Self {
        Self {
            index,
            config,
            prefix: PrefixStrategy {
                max_matches: config.max_prefix_matches,
            },
            edit_distance: EditDistanceStrategy {
                max_distance: config.max_edit_distance,
                max_matches: config.max_suggestions,
            },
        }
    }

    /// Stored words sharing the first half of `word`, in vocabulary order
    #[must_use]
    pub fn similar_prefix_words(&self, word: &str) -> Vec<&'a str> {
        self.prefix.suggest(word, self.index.words())
    }

    /// Stored words within the edit distance bound, closest and shortest first
    #[must_use]
    pub fn edit_distance_matches(&self, word: &str) -> Vec<&'a str> {
        self.edit_distance.suggest(word, self.index.words())
    }

    /// Merged, deduplicated suggestions for `word`
    ///
    /// Prefix matches come first, then edit-distance matches fill the remaining
    /// slots. Deduplication compares the stored strings exactly, so two
    /// spellings that differ only in case can both appear.
    ///
    /// # Examples
    /// ```
    /// use dictionary_search::core::WordIndex;
    /// use dictionary_search::suggest::{SuggestionConfig, SuggestionEngine};
    ///
    /// let index = WordIndex::build(["apple", "apply", "ample", "orange"]);
    /// let engine = SuggestionEngine::new(&index, SuggestionConfig::default());
    ///
    /// assert_eq!(engine.suggestions("appli"), ["apple", "apply", "ample"]);
    /// ```
    #[must_use]
    pub fn suggestions(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }

        let max = self.config.max_suggestions;
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut suggestions: Vec<String> = Vec::with_capacity(max);

        for candidate in self.similar_prefix_words(word) {
            if suggestions.len() >= max {
                break;
            }
            if seen.insert(candidate) {
                suggestions.push(candidate.to_string());
            }
        }

        for candidate in self.edit_distance_matches(word) {
            if suggestions.len() >= max {
                break;
            }
            if seen.insert(candidate) {
                suggestions.push(candidate.to_string());
            }
        }

        suggestions
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SuggestionConfig {
        &self.config
    }
}
