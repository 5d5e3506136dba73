// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each one owns its
//! children by value and carries the payload of the word that ends at it, if any.

use std::collections::BTreeMap;

/// A node in the prefix trie.
///
/// Each node represents a single character on a key path. A node is terminal
/// exactly when it holds a payload, so the two can never disagree.
#[derive(Debug, Clone)]
pub struct TrieNode<T> {
    /// Character consumed to reach this node (`None` for the root)
    character: Option<char>,

    /// Children keyed by the next character, iterated in ascending order
    children: BTreeMap<char, TrieNode<T>>,

    /// Payload of the word terminating here
    payload: Option<T>,
}

impl<T> TrieNode<T> {
    /// Creates the root node, which represents no character.
    pub(crate) fn root() -> Self {
        Self {
            character: None,
            children: BTreeMap::new(),
            payload: None,
        }
    }

    /// Creates an empty, non-terminal node for `character`.
    pub(crate) fn new(character: char) -> Self {
        Self {
            character: Some(character),
            children: BTreeMap::new(),
            payload: None,
        }
    }

    /// Returns the character this node represents, or `None` for the root.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Returns `true` if this is the root node.
    pub fn is_root(&self) -> bool {
        self.character.is_none()
    }

    /// Returns `true` if an inserted word ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.payload.is_some()
    }

    /// Returns the payload of the word ending here, if any.
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Returns the child reached by consuming `character`.
    pub fn child(&self, character: char) -> Option<&TrieNode<T>> {
        self.children.get(&character)
    }

    /// Iterates over the children in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &TrieNode<T>> + ExactSizeIterator {
        self.children.values()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if `self` and `other` are the same node in memory.
    ///
    /// Renderers use this to decide whether a node lies on the active path.
    pub fn ptr_eq(&self, other: &TrieNode<T>) -> bool {
        std::ptr::eq(self, other)
    }

    /// Returns the child for `character`, creating it if missing.
    pub(crate) fn child_or_insert(&mut self, character: char) -> &mut TrieNode<T> {
        self.children
            .entry(character)
            .or_insert_with(|| TrieNode::new(character))
    }

    /// Stores `payload`, returning the one it replaced.
    pub(crate) fn set_payload(&mut self, payload: T) -> Option<T> {
        self.payload.replace(payload)
    }
}
