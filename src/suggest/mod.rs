//! Suggestion generation for words missing from the index
//!
//! Two independent strategies (shared prefix and bounded edit distance) are
//! merged by [`SuggestionEngine`].

mod engine;
pub mod strategy;

pub use engine::{SuggestionConfig, SuggestionEngine};
pub use strategy::{EditDistanceStrategy, PrefixStrategy, ScoredCandidate, SuggestionStrategy};
