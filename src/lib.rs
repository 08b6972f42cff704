//! Dictionary Search
//!
//! Checks whether a word belongs to a fixed vocabulary using a prefix trie and,
//! when it does not, suggests the closest known words by shared prefix and
//! bounded Levenshtein distance.
//!
//! # Quick Start
//!
//! ```rust
//! use dictionary_search::Dictionary;
//!
//! let dictionary = Dictionary::build(["apple", "apply", "ample", "orange"]);
//!
//! let result = dictionary.search("appli");
//! assert!(!result.found);
//! println!("{}", result.message);
//! for suggestion in result.suggestions() {
//!     println!("  did you mean {suggestion}?");
//! }
//! ```

// Core domain types
pub mod core;

// Suggestion strategies and merging
pub mod suggest;

// Index handle and query handling
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use dictionary::{Dictionary, search};
