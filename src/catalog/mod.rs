//! Product catalog for Lanai.
//!
//! A catalog is the list of `(name, product)` pairs indexed by the trie at
//! startup. It can come from the built-in sample set or from a TOML or JSON
//! file shaped like:
//!
//! ```toml
//! [[products]]
//! id = 1
//! name = "Samsung TV"
//! category = "ELEC"
//! price = "499 CR"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data_structures::Trie;
use crate::error::catalog::CatalogError;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id
    pub id: u32,

    /// Display name, also the indexed word
    pub name: String,

    /// Short category tag
    pub category: String,

    /// Display price
    pub price: String,
}

impl Product {
    /// Creates a new product.
    pub fn new<N, C, P>(id: u32, name: N, category: C, price: P) -> Self
    where
        N: Into<String>,
        C: Into<String>,
        P: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price: price.into(),
        }
    }
}

/// An ordered collection of products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Products in load order
    pub products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from a list of products without validating it.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Returns the built-in demo catalog.
    pub fn sample() -> Self {
        Self::new(vec![
            Product::new(1, "Samsung TV", "ELEC", "499 CR"),
            Product::new(2, "Samsung Phone", "MOB", "799 CR"),
            Product::new(3, "Sony Headphones", "AUDIO", "150 CR"),
            Product::new(5, "Soap", "HOME", "005 CR"),
            Product::new(7, "Apple iPhone", "MOB", "999 CR"),
            Product::new(8, "Apple Watch", "WEAR", "399 CR"),
            Product::new(9, "Adidas Shoes", "GEAR", "085 CR"),
            Product::new(10, "Canon Camera", "PHOTO", "600 CR"),
            Product::new(11, "Coffee Maker", "HOME", "045 CR"),
            Product::new(12, "Nike Shorts", "GEAR", "035 CR"),
        ])
    }

    /// Loads and validates a catalog file.
    ///
    /// The format is chosen by extension: `.toml` or `.json`.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the catalog file.
    ///
    /// # Returns
    ///
    /// * `Ok(Catalog)` - The parsed catalog.
    /// * `Err(CatalogError)` - If the file is missing, unreadable, malformed or invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.to_path_buf()));
        }

        let parse: fn(&str) -> CatalogResult<Self> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => Self::from_toml,
                Some("json") => Self::from_json,
                _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
            };

        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = parse(&contents)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses and validates a TOML catalog.
    pub fn from_toml(contents: &str) -> CatalogResult<Self> {
        let catalog: Self =
            toml::from_str(contents).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a JSON catalog.
    pub fn from_json(contents: &str) -> CatalogResult<Self> {
        let catalog: Self =
            serde_json::from_str(contents).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serializes the catalog as pretty TOML.
    pub fn to_toml(&self) -> CatalogResult<String> {
        toml::to_string_pretty(self).map_err(|e| CatalogError::SerializeError(e.to_string()))
    }

    /// Checks that every product has a name and a unique id.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::with_capacity(self.products.len());
        for product in &self.products {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(())
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Builds a trie keyed by product name.
    ///
    /// Products whose names collide case-insensitively keep only the later one.
    pub fn build_index(&self) -> Trie<Product> {
        let trie: Trie<Product> = self
            .products
            .iter()
            .map(|product| (product.name.as_str(), product.clone()))
            .collect();

        tracing::debug!(
            products = self.products.len(),
            words = trie.len(),
            nodes = trie.node_count(),
            "Catalog index built"
        );
        trie
    }
}
