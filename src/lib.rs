//! Lanai Library
//!
//! Lanai is an interactive explorer for prefix trees. It indexes a small
//! product catalog in a trie and shows, for every typed prefix, which nodes
//! the lookup walks through and which products it suggests.
//!
//! # Architecture
//!
//! - [`data_structures::trie`]: the synchronous, infallible prefix trie
//! - [`catalog`]: products and catalog file loading
//! - [`autocomplete`]: search sessions, debug stepping and match highlighting
//! - [`config`] and [`error`]: layered configuration and error reporting

pub mod autocomplete;
pub mod catalog;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
