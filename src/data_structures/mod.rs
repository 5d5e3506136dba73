//! Data structures for Lanai.
//!
//! This module contains the prefix trie that backs autocomplete. It is
//! synchronous and free of I/O; everything above it (catalog loading,
//! sessions, the CLI) only talks to it through [`Trie`].

pub mod trie;

// Re-export common data structures
pub use trie::{Trie, TrieNode, TriePath, Walk};
