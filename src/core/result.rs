//! Search result value
//!
//! A fresh result is produced for every query. There are no error paths:
//! invalid input, misses and hits are all reported through this value.

use std::fmt;

/// Outcome of a single dictionary search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Whether the query is a known word
    pub found: bool,
    /// Human-readable summary
    pub message: String,
    /// The case-folded query, set only when found
    pub word: Option<String>,
    /// Alternative words, set only for a valid query that was not found
    pub suggestions: Option<Vec<String>>,
}

/// Classification of a [`SearchResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// Empty query
    InvalidQuery,
    /// Valid query absent from the vocabulary
    NotFound,
    /// Valid query present in the vocabulary
    Found,
}

impl SearchResult {
    /// Result for an empty query
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            found: false,
            message: "Please enter a valid word to search.".to_string(),
            word: None,
            suggestions: None,
        }
    }

    /// Result for a word present in the vocabulary
    #[must_use]
    pub fn found(word: String) -> Self {
        Self {
            found: true,
            message: format!("\"{word}\" was found in the dictionary."),
            word: Some(word),
            suggestions: None,
        }
    }

    /// Result for a word absent from the vocabulary
    #[must_use]
    pub fn not_found(word: &str, suggestions: Vec<String>) -> Self {
        Self {
            found: false,
            message: format!("\"{word}\" not found in the dictionary."),
            word: None,
            suggestions: Some(suggestions),
        }
    }

    #[must_use]
    pub fn outcome(&self) -> SearchOutcome {
        match (self.found, &self.suggestions) {
            (true, _) => SearchOutcome::Found,
            (false, Some(_)) => SearchOutcome::NotFound,
            (false, None) => SearchOutcome::InvalidQuery,
        }
    }

    /// Suggestions as a slice, empty when none were computed
    #[inline]
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_has_no_payload() {
        let result = SearchResult::invalid();

        assert!(!result.found);
        assert_eq!(result.word, None);
        assert_eq!(result.suggestions, None);
        assert_eq!(result.outcome(), SearchOutcome::InvalidQuery);
        assert!(result.suggestions().is_empty());
    }

    #[test]
    fn found_carries_word() {
        let result = SearchResult::found("cat".to_string());

        assert!(result.found);
        assert_eq!(result.word.as_deref(), Some("cat"));
        assert_eq!(result.message, "\"cat\" was found in the dictionary.");
        assert_eq!(result.outcome(), SearchOutcome::Found);
    }

    #[test]
    fn not_found_carries_suggestions() {
        let result = SearchResult::not_found("cta", vec!["cat".to_string()]);

        assert!(!result.found);
        assert_eq!(result.word, None);
        assert_eq!(result.suggestions(), ["cat"]);
        assert_eq!(result.message, "\"cta\" not found in the dictionary.");
        assert_eq!(result.outcome(), SearchOutcome::NotFound);
    }

    #[test]
    fn not_found_without_suggestions_is_still_not_found() {
        let result = SearchResult::not_found("zzz", Vec::new());
        assert_eq!(result.outcome(), SearchOutcome::NotFound);
    }

    #[test]
    fn display_is_message() {
        let result = SearchResult::found("dog".to_string());
        assert_eq!(result.to_string(), result.message);
    }
}
