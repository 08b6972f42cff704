//! Word list loading utilities
//!
//! Provides functions to load a vocabulary from a file or from the embedded
//! constant.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a vocabulary
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no words", path.display())]
    Empty { path: PathBuf },
}

/// Load words from a file, one per line
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Words keep their original casing and order.
///
/// # Errors
///
/// Returns [`VocabularyError::Io`] if the file cannot be read, or
/// [`VocabularyError::Empty`] if it holds no words.
///
/// # Examples
/// ```no_run
/// use dictionary_search::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, VocabularyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    if words.is_empty() {
        return Err(VocabularyError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(words)
}

/// Parse word list text, one word per line
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

/// Convert an embedded string slice to an owned vocabulary
///
/// # Examples
/// ```
/// use dictionary_search::wordlists::loader::words_from_slice;
/// use dictionary_search::wordlists::VOCABULARY;
///
/// let words = words_from_slice(VOCABULARY);
/// assert_eq!(words.len(), VOCABULARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
