//! Dictionary handle and query handling
//!
//! A [`Dictionary`] is built once from a vocabulary and then answers any number
//! of read-only searches.

use crate::core::{SearchResult, WordIndex};
use crate::suggest::{SuggestionConfig, SuggestionEngine};

/// Search `word` in `index`, suggesting alternatives on a miss
///
/// Empty input yields an invalid-query result. Otherwise the query is
/// lowercased, looked up, and on a miss passed to the suggestion engine.
#[must_use]
pub fn search(index: &WordIndex, config: SuggestionConfig, word: &str) -> SearchResult {
    if word.is_empty() {
        return SearchResult::invalid();
    }

    let word = word.to_lowercase();

    if index.lookup(&word) {
        SearchResult::found(word)
    } else {
        let suggestions = SuggestionEngine::new(index, config).suggestions(&word);
        SearchResult::not_found(&word, suggestions)
    }
}

/// An immutable, searchable vocabulary
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    index: WordIndex,
    config: SuggestionConfig,
}

impl Dictionary {
    /// Build a dictionary with the default suggestion limits
    ///
    /// # Examples
    /// ```
    /// use dictionary_search::Dictionary;
    ///
    /// let dictionary = Dictionary::build(["apple", "apply", "ample", "orange"]);
    ///
    /// let hit = dictionary.search("Apple");
    /// assert!(hit.found);
    /// assert_eq!(hit.word.as_deref(), Some("apple"));
    ///
    /// let miss = dictionary.search("appli");
    /// assert!(!miss.found);
    /// assert_eq!(miss.suggestions(), ["apple", "apply", "ample"]);
    /// ```
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(words, SuggestionConfig::default())
    }

    pub fn with_config<I, S>(words: I, config: SuggestionConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            index: WordIndex::build(words),
            config,
        }
    }

    /// Search for a word, see [`search`]
    #[must_use]
    pub fn search(&self, word: &str) -> SearchResult {
        search(&self.index, self.config, word)
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &WordIndex {
        &self.index
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> SuggestionConfig {
        self.config
    }

    /// Number of vocabulary entries the dictionary was built from
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
