// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pre-order traversal over a trie's nodes.

use std::iter::FusedIterator;

use super::TrieNode;

/// Pre-order iterator yielding `(depth, node)` pairs.
///
/// Children are visited in ascending character order. The starting node has
/// depth 0.
#[derive(Debug)]
pub struct Walk<'a, T> {
    stack: Vec<(usize, &'a TrieNode<T>)>,
}

impl<'a, T> Walk<'a, T> {
    pub(super) fn new(start: &'a TrieNode<T>) -> Self {
        Self {
            stack: vec![(0, start)],
        }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = (usize, &'a TrieNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reverse so the smallest character is popped first
        self.stack
            .extend(node.children().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

impl<T> FusedIterator for Walk<'_, T> {}
