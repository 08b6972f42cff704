//! Core domain types for dictionary search
//!
//! This module contains the membership index, the edit-distance metric and the
//! search result value. Everything here is pure and free of terminal I/O.

mod distance;
mod result;
mod trie;

pub use distance::levenshtein_distance;
pub use result::{SearchOutcome, SearchResult};
pub use trie::{TrieNode, WordIndex};
