//! Loader configuration.
//!
//! Read from an optional TOML file, e.g.
//!
//! ```toml
//! comment = "#"
//! separator = "/"
//! strict = false
//! max_vertices = 1000000
//! log_filter = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{GraphError, Result};

/// Knobs shared by the numeric and symbol graph loaders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Lines whose first character is this marker are skipped.
    pub comment: char,
    /// Field separator for symbol graph records.
    pub separator: String,
    /// Fail on malformed or out-of-range records instead of skipping them.
    pub strict: bool,
    /// Largest vertex count a numeric graph header may declare.
    pub max_vertices: usize,
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            comment: '#',
            separator: " ".to_string(),
            strict: false,
            max_vertices: 100_000_000,
            log_filter: "warn".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a file that exists but cannot
    /// be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| GraphError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no loader can work with.
    ///
    /// Called by `from_toml`, by the CLI after applying overrides, and by
    /// the symbol loader before splitting records.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(GraphError::Config("separator must not be empty".to_string()));
        }
        Ok(())
    }

    /// Same config with a different symbol separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Same config with strict mode toggled.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// True if `line` (already trimmed) carries no data.
    pub(crate) fn is_skippable(&self, line: &str) -> bool {
        line.is_empty() || line.starts_with(self.comment)
    }
}
