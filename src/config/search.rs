//! Search configuration module.
//!
//! Controls the initial query and how many suggestions are displayed.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound for `max_suggestions`.
const MAX_SUGGESTIONS_LIMIT: usize = 10_000;

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Term preloaded into a new search session
    pub initial_term: String,

    /// Maximum number of suggestions to display (0 for unlimited)
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_term: "App".to_string(),
            max_suggestions: 0,
        }
    }
}

impl SearchConfig {
    /// Returns the display limit, or `None` when unlimited.
    pub fn limit(&self) -> Option<usize> {
        (self.max_suggestions > 0).then_some(self.max_suggestions)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions > MAX_SUGGESTIONS_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.max_suggestions".to_string(),
                message: format!("must be at most {MAX_SUGGESTIONS_LIMIT}"),
            });
        }

        Ok(())
    }
}
