//! Catalog error module.
//!
//! Errors raised while reading, parsing, validating or writing a product catalog.
//! The trie itself never fails; these only surface when catalog data comes
//! from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when the catalog file is missing.
    #[error("Catalog file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the catalog file cannot be read.
    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when the file extension is not a known catalog format.
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Error when the catalog contents cannot be parsed.
    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    /// Error when the catalog cannot be serialized.
    #[error("Failed to serialize catalog: {0}")]
    SerializeError(String),

    /// Error when a product has an empty name.
    #[error("Product {0} has an empty name")]
    EmptyName(u32),

    /// Error when two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(u32),
}
