//! Prefix trie over a fixed vocabulary
//!
//! Every word is stored case-folded, one edge per character. The original
//! spellings are kept alongside in input order for suggestion generation.

use rustc_hash::FxHashMap;

/// A single trie node
///
/// Children are owned exclusively by their parent, so the structure is a plain
/// tree with no shared references.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    is_end_of_word: bool,
}

impl TrieNode {
    /// Get the child reached by `ch`, if any
    #[inline]
    #[must_use]
    pub fn child(&self, ch: char) -> Option<&Self> {
        self.children.get(&ch)
    }

    /// Whether a complete word ends at this node
    #[inline]
    #[must_use]
    pub const fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Number of nodes in this subtree, including `self`
    fn subtree_size(&self) -> usize {
        1 + self.children.values().map(Self::subtree_size).sum::<usize>()
    }
}

/// Exact membership index over a static vocabulary
///
/// Built once, then read-only. Lookups cost time proportional to the query
/// length, independent of vocabulary size.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    root: TrieNode,
    words: Vec<String>,
    unique_words: usize,
}

impl WordIndex {
    /// Build an index from a vocabulary
    ///
    /// The input is stored verbatim (duplicates and casing included) and each
    /// word is inserted lowercased into the trie.
    ///
    /// # Examples
    /// ```
    /// use dictionary_search::core::WordIndex;
    ///
    /// let index = WordIndex::build(["Apple", "apply", "ORANGE"]);
    /// assert!(index.lookup("apple"));
    /// assert!(index.lookup("Orange"));
    /// assert!(!index.lookup("app"));
    /// assert_eq!(index.words(), ["Apple", "apply", "ORANGE"]);
    /// ```
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        };

        // Folded copies are needed because insertion borrows `index` mutably
        let folded: Vec<String> = index.words.iter().map(|w| w.to_lowercase()).collect();
        for word in &folded {
            index.insert(word);
        }

        index
    }

    /// Insert a single word
    ///
    /// Empty input is a no-op. Inserting the same word twice leaves the
    /// structure unchanged.
    pub(crate) fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        for ch in word.chars() {
            current = current.children.entry(ch).or_default();
        }

        if !current.is_end_of_word {
            current.is_end_of_word = true;
            self.unique_words += 1;
        }
    }

    /// Check whether `word` is in the vocabulary, ignoring case
    ///
    /// A strict prefix of a stored word is not a match. Empty input never
    /// matches.
    #[must_use]
    pub fn lookup(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = &self.root;
        for ch in word.to_lowercase().chars() {
            match current.child(ch) {
                Some(next) => current = next,
                None => return false,
            }
        }

        current.is_end_of_word()
    }

    /// The vocabulary as originally supplied, in input order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of stored vocabulary entries (duplicates counted)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct case-folded words in the trie
    #[inline]
    #[must_use]
    pub const fn unique_words(&self) -> usize {
        self.unique_words
    }

    /// Total trie nodes, including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_finds_every_inserted_word() {
        let vocabulary = ["apple", "apply", "ample", "orange"];
        let index = WordIndex::build(vocabulary);

        for word in vocabulary {
            assert!(index.lookup(word), "{word} should be found");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = WordIndex::build(["Apple", "banana"]);

        assert!(index.lookup("apple"));
        assert!(index.lookup("APPLE"));
        assert!(index.lookup("aPpLe"));
        assert!(index.lookup("BANANA"));
    }

    #[test]
    fn strict_prefix_is_not_a_word() {
        let index = WordIndex::build(["apple"]);

        assert!(!index.lookup("app"));
        assert!(!index.lookup("a"));
        assert!(!index.lookup("apples"));
    }

    #[test]
    fn absent_words_are_not_found() {
        let index = WordIndex::build(["cat", "dog"]);

        assert!(!index.lookup("zzz"));
        assert!(!index.lookup("cow"));
        assert!(!index.lookup("dogs"));
    }

    #[test]
    fn empty_query_never_matches() {
        let index = WordIndex::build(["cat", ""]);
        assert!(!index.lookup(""));
    }

    #[test]
    fn empty_insert_is_a_noop() {
        let mut index = WordIndex::default();
        index.insert("");

        assert_eq!(index.node_count(), 1);
        assert_eq!(index.unique_words(), 0);
        assert!(!index.root().is_end_of_word());
    }

    #[test]
    fn insert_is_idempotent() {
        let mut once = WordIndex::default();
        once.insert("cat");

        let mut twice = WordIndex::default();
        twice.insert("cat");
        twice.insert("cat");

        assert_eq!(once.node_count(), twice.node_count());
        assert_eq!(once.unique_words(), twice.unique_words());
        for query in ["cat", "ca", "c", "cats", "dog"] {
            assert_eq!(once.lookup(query), twice.lookup(query));
        }
    }

    #[test]
    fn duplicates_are_kept_in_word_list() {
        let index = WordIndex::build(["cat", "Cat", "cat"]);

        assert_eq!(index.len(), 3);
        assert_eq!(index.unique_words(), 1);
        assert_eq!(index.words(), ["cat", "Cat", "cat"]);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        // root, a-p-p-l, then e and y
        let index = WordIndex::build(["apple", "apply"]);
        assert_eq!(index.node_count(), 1 + 4 + 2);
    }

    #[test]
    fn terminal_flag_walks_path() {
        let index = WordIndex::build(["to", "tom"]);
        let t = index.root().child('t').unwrap();
        let o = t.child('o').unwrap();

        assert!(!t.is_end_of_word());
        assert!(o.is_end_of_word());
        assert!(o.child('m').unwrap().is_end_of_word());
        assert!(o.child('x').is_none());
    }

    #[test]
    fn empty_vocabulary_always_misses() {
        let index = WordIndex::build(Vec::<String>::new());

        assert!(index.is_empty());
        assert!(!index.lookup("anything"));
    }

    #[test]
    fn non_ascii_words_round_trip() {
        let index = WordIndex::build(["Čaj", "naïve"]);

        assert!(index.lookup("čaj"));
        assert!(index.lookup("NAÏVE"));
    }
}
