//! Catalog source configuration module.
//!
//! Selects where the product catalog comes from at startup.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Path to a TOML or JSON catalog file (None for the built-in sample catalog)
    pub path: Option<PathBuf>,
}

impl Validate for CatalogConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml" | "json") => {}
                _ => {
                    return Err(ConfigError::ValidationError(format!(
                        "Catalog path must end in .toml or .json: {path:?}"
                    )))
                }
            }
        }

        Ok(())
    }
}
