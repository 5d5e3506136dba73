// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix trie with ordered suggestion retrieval.
//!
//! The trie indexes words character by character and attaches a caller-supplied
//! payload to the node where each word ends. Keys are lowercased on the way in,
//! so storage and lookup are case-insensitive.
//!
//! # Features
//!
//! - Longest-matched prefix paths for highlighting the active traversal.
//! - Suggestions in ascending lexicographic order of the remaining suffix.
//! - Payload presence and terminal state are the same fact, so they cannot drift.
//! - No operation fails: a missing prefix is an empty or partial result.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("apple", 0);
//! trie.insert("application", 1);
//! trie.insert("apply", 2);
//! trie.insert("app", 3);
//!
//! let ids: Vec<i32> = trie.get_suggestions("APP").into_iter().copied().collect();
//! assert_eq!(ids, vec![3, 0, 1, 2]);
//!
//! let path = trie.get_path("apx");
//! assert_eq!(path.len(), 3);
//! assert!(!path.is_complete());
//! ```

mod node;
mod path;
mod walk;

pub use node::TrieNode;
pub use path::TriePath;
pub use walk::Walk;

/// Lowercases a key before it touches the trie.
fn normalize(key: &str) -> String {
    key.to_lowercase()
}

/// A prefix tree mapping case-insensitive words to payloads.
///
/// `insert` takes `&mut self` and every query takes `&self`, so a trie is
/// either being mutated by one caller or read by any number of callers, never
/// both at once. Callers needing cross-thread access wrap it themselves.
#[derive(Debug, Clone)]
pub struct Trie<T> {
    root: TrieNode<T>,
}

impl<T> Trie<T> {
    /// Creates a new empty trie holding only the root node.
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode<T> {
        &self.root
    }

    /// Inserts a word and associates `data` with it.
    ///
    /// The word is lowercased, then one node per character is created as
    /// needed. Inserting a word that already exists replaces its payload.
    /// Inserting the empty string marks the root itself as terminal.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to index.
    /// * `data` - The payload returned by suggestions that reach this word.
    ///
    /// # Returns
    ///
    /// The payload previously stored for the same normalized word, if any.
    pub fn insert<W>(&mut self, word: W, data: T) -> Option<T>
    where
        W: AsRef<str>,
    {
        let word = normalize(word.as_ref());

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }

        let previous = node.set_payload(data);
        if previous.is_some() {
            tracing::debug!(word = %word, "Replaced payload of existing word");
        } else {
            tracing::trace!(word = %word, "Inserted word");
        }
        previous
    }

    /// Returns the nodes visited while matching `prefix` from the root.
    ///
    /// The walk stops at the first character with no matching child, so the
    /// result is the longest matched prefix. An empty prefix yields only the
    /// root.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The typed prefix (case-insensitive).
    ///
    /// # Returns
    ///
    /// A [`TriePath`] holding the root followed by one node per matched character.
    pub fn get_path<P>(&self, prefix: P) -> TriePath<'_, T>
    where
        P: AsRef<str>,
    {
        let prefix = normalize(prefix.as_ref());
        let mut path = TriePath::new(&self.root, prefix.chars().count());

        let mut node = &self.root;
        for c in prefix.chars() {
            match node.child(c) {
                Some(next) => {
                    path.push(next);
                    node = next;
                }
                None => break,
            }
        }

        path
    }

    /// Returns the payloads of every word starting with `prefix`.
    ///
    /// Payloads are ordered by a pre-order walk of the matched subtree with
    /// children taken in ascending character order, so a word comes before its
    /// extensions and siblings follow lexicographic order. An empty prefix, or
    /// one that does not fully match, yields nothing.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The typed prefix (case-insensitive).
    ///
    /// # Returns
    ///
    /// Borrowed payloads in deterministic order.
    pub fn get_suggestions<P>(&self, prefix: P) -> Vec<&T>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            return Vec::new();
        }

        match self.find_node(prefix) {
            Some(start) => Walk::new(start)
                .filter_map(|(_, node)| node.payload())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns the payload stored for exactly `word`.
    pub fn get<W>(&self, word: W) -> Option<&T>
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref()).and_then(TrieNode::payload)
    }

    /// Checks whether exactly `word` was inserted.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.get(word).is_some()
    }

    /// Returns the number of distinct words in the trie.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.walk().filter(|(_, node)| node.is_terminal()).count()
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0 && !self.root.is_terminal()
    }

    /// Returns the number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Walks every node in pre-order, children in ascending character order.
    pub fn walk(&self) -> Walk<'_, T> {
        Walk::new(&self.root)
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode<T>> {
        normalize(key)
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> Extend<(S, T)> for Trie<T>
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (S, T)>>(&mut self, iter: I) {
        for (word, data) in iter {
            self.insert(word, data);
        }
    }
}

impl<S, T> FromIterator<(S, T)> for Trie<T>
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
