// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Borrowed prefix paths returned by [`Trie::get_path`](super::Trie::get_path).

use std::ops::Index;

use super::TrieNode;

/// The nodes visited while matching a prefix, starting at the root.
///
/// A path always holds at least the root. It borrows the trie, so the trie
/// cannot be mutated while a path is alive.
#[derive(Debug)]
pub struct TriePath<'a, T> {
    nodes: Vec<&'a TrieNode<T>>,
    /// Characters in the normalized prefix
    requested: usize,
}

impl<'a, T> TriePath<'a, T> {
    pub(super) fn new(root: &'a TrieNode<T>, requested: usize) -> Self {
        let mut nodes = Vec::with_capacity(requested + 1);
        nodes.push(root);
        Self { nodes, requested }
    }

    pub(super) fn push(&mut self, node: &'a TrieNode<T>) {
        self.nodes.push(node);
    }

    /// The visited nodes, root first.
    pub fn nodes(&self) -> &[&'a TrieNode<T>] {
        &self.nodes
    }

    /// Number of nodes on the path, root included. Never zero.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; a path contains at least the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of prefix characters that were matched.
    pub fn depth(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The deepest node reached.
    pub fn last(&self) -> &'a TrieNode<T> {
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns `true` if every character of the prefix was matched.
    pub fn is_complete(&self) -> bool {
        self.depth() == self.requested
    }

    /// Returns `true` if `node` (by identity) lies on this path.
    pub fn contains(&self, node: &TrieNode<T>) -> bool {
        self.nodes.iter().any(|n| n.ptr_eq(node))
    }

    /// Iterates over the visited nodes, root first.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, &'a TrieNode<T>>> {
        self.nodes.iter().copied()
    }

    /// The matched characters as a string.
    pub fn matched(&self) -> String {
        self.nodes.iter().filter_map(|n| n.character()).collect()
    }
}

impl<'a, T> Index<usize> for TriePath<'a, T> {
    type Output = TrieNode<T>;

    fn index(&self, index: usize) -> &Self::Output {
        self.nodes[index]
    }
}

impl<'a, T> IntoIterator for TriePath<'a, T> {
    type Item = &'a TrieNode<T>;
    type IntoIter = std::vec::IntoIter<&'a TrieNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'p, 'a, T> IntoIterator for &'p TriePath<'a, T> {
    type Item = &'a TrieNode<T>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'p, &'a TrieNode<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
