//! Test modules for Lanai.
//!
//! This module contains the crate-level testing infrastructure:
//! - Configuration loading and validation tests
//! - Error reporting tests
//! - Property-based tests for the prefix trie
//! - Catalog file loading tests
//! - Shared strategies and fixtures

pub mod config_tests;
pub mod trie_property_tests;

pub use test_utils::{
    create_test_dir, string_strategy, word_list_strategy, word_strategy, TestFixture,
};
