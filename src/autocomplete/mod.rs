//! Autocomplete over a product catalog.
//!
//! [`Autocomplete`] owns the trie built from a [`Catalog`] and answers the
//! two questions a front end asks on every keystroke: which nodes are on the
//! active path, and which products match the typed term.

mod highlight;
mod session;

pub use highlight::highlight;
pub use session::SearchSession;

use crate::catalog::{Catalog, Product};
use crate::data_structures::{Trie, TriePath};

/// A product suggestion split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'a> {
    /// The suggested product
    pub product: &'a Product,
    /// Leading part of the name covered by the typed term
    pub matched: &'a str,
    /// Remainder of the name
    pub rest: &'a str,
}

/// Prefix autocomplete engine backed by a trie of product names.
#[derive(Debug, Clone)]
pub struct Autocomplete {
    index: Trie<Product>,
    limit: Option<usize>,
}

impl Autocomplete {
    /// Indexes every product in `catalog` by name.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            index: catalog.build_index(),
            limit: None,
        }
    }

    /// Caps the number of suggestions returned (`None` for unlimited).
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// The underlying trie.
    pub fn index(&self) -> &Trie<Product> {
        &self.index
    }

    /// Products whose names start with `term`, in lexicographic order.
    pub fn suggest(&self, term: &str) -> Vec<&Product> {
        let mut products = self.index.get_suggestions(term);
        if let Some(limit) = self.limit {
            products.truncate(limit);
        }
        tracing::trace!(term, matches = products.len(), "Suggestions computed");
        products
    }

    /// The trie path to highlight for `session`.
    pub fn active_path(&self, session: &SearchSession) -> TriePath<'_, Product> {
        self.index.get_path(session.active_prefix())
    }

    /// Suggestions for the session's full term, split for highlighting.
    pub fn suggestions(&self, session: &SearchSession) -> Vec<Suggestion<'_>> {
        let match_len = session.match_len();
        self.suggest(session.term())
            .into_iter()
            .map(|product| {
                let (matched, rest) = highlight(&product.name, match_len);
                Suggestion {
                    product,
                    matched,
                    rest,
                }
            })
            .collect()
    }
}
