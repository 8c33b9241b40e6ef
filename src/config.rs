//! Configuration options for URI generation during an export.
//!
//! This module provides the [`ExportConfig`] struct which controls the entity
//! prefix and which optional outputs a driver should produce.

use serde::{Deserialize, Serialize};

use crate::error::{RdfError, Result};
use crate::vocabulary::WIKIDATA;

/// Configuration for URI generation.
///
/// # Examples
///
/// ```
/// use wikibase_rdf::ExportConfig;
///
/// // Wikidata URIs, external links and vocabulary header enabled
/// let config = ExportConfig::default();
///
/// // A private Wikibase instance without external links
/// let config = ExportConfig::new()
///     .with_entity_prefix("https://wiki.example.org/entity/")
///     .with_external_links(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Prefix of entity, statement and property URIs.
    ///
    /// Must end with `/` or `#` so that ids form the local name.
    pub entity_prefix: String,

    /// Rewrite external identifier values into linked-data URIs.
    ///
    /// When false, every value is exported as a literal.
    pub link_external_ids: bool,

    /// Emit OWL declarations for the known vocabulary at the head of the output.
    pub declare_vocabulary: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            entity_prefix: WIKIDATA.to_string(),
            link_external_ids: true,
            declare_vocabulary: true,
        }
    }
}

impl ExportConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entity prefix.
    #[must_use]
    pub fn with_entity_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.entity_prefix = prefix.into();
        self
    }

    /// Enables or disables external identifier linking.
    #[must_use]
    pub const fn with_external_links(mut self, enabled: bool) -> Self {
        self.link_external_ids = enabled;
        self
    }

    /// Enables or disables vocabulary declarations.
    #[must_use]
    pub const fn with_vocabulary_declarations(mut self, enabled: bool) -> Self {
        self.declare_vocabulary = enabled;
        self
    }

    /// Parses a configuration from JSON; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::Config`] if the JSON is invalid or the result fails
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RdfError::Config(format!("Invalid configuration JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can produce well-formed URIs.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::Config`] for an empty prefix or one not ending in
    /// `/` or `#`.
    pub fn validate(&self) -> Result<()> {
        if self.entity_prefix.is_empty() {
            return Err(RdfError::Config("entity prefix is empty".into()));
        }
        if !(self.entity_prefix.ends_with('/') || self.entity_prefix.ends_with('#')) {
            return Err(RdfError::Config(format!(
                "entity prefix must end with '/' or '#': {}",
                self.entity_prefix
            )));
        }
        Ok(())
    }
}
