//! Vocabulary sources
//!
//! Provides the embedded vocabulary compiled into the binary, plus loading of
//! custom word lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{VOCABULARY, VOCABULARY_COUNT};
pub use loader::VocabularyError;
