//! One-stop URI source for an RDF export driver.
//!
//! [`ExportContext`] bundles an [`ExportConfig`], a [`UriBuilder`] and a
//! [`LinkedDataResolver`] so a driver can hold a single value for the whole
//! export. It is immutable and can be shared across threads.

use crate::config::ExportConfig;
use crate::datamodel::{EntityIdValue, PropertyIdValue, Statement};
use crate::error::Result;
use crate::linked_data::LinkedDataResolver;
use crate::uri::{PropertyContext, UriBuilder};
use crate::vocabulary::known_vocabulary_types;

/// URIs for one export run.
#[derive(Debug, Clone)]
pub struct ExportContext {
    config: ExportConfig,
    uris: UriBuilder,
    resolver: LinkedDataResolver,
}

impl ExportContext {
    /// Creates a context with the standard linked-data rules.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn new(config: ExportConfig) -> Result<Self> {
        config.validate()?;
        let uris = UriBuilder::new(config.entity_prefix.clone());
        Ok(Self {
            config,
            uris,
            resolver: LinkedDataResolver::standard(),
        })
    }

    /// Replaces the linked-data rule table.
    #[must_use]
    pub fn with_resolver(mut self, resolver: LinkedDataResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// The URI builder in use.
    #[must_use]
    pub const fn uri_builder(&self) -> &UriBuilder {
        &self.uris
    }

    /// See [`UriBuilder::entity_uri`].
    #[must_use]
    pub fn entity_uri(&self, entity: &impl EntityIdValue) -> String {
        self.uris.entity_uri(entity)
    }

    /// See [`UriBuilder::statement_uri`].
    #[must_use]
    pub fn statement_uri(&self, statement: &impl Statement) -> String {
        self.uris.statement_uri(statement)
    }

    /// See [`UriBuilder::property_uri`].
    #[must_use]
    pub fn property_uri(&self, property: &impl PropertyIdValue, context: PropertyContext) -> String {
        self.uris.property_uri(property, context)
    }

    /// External URI for a statement value, or `None` to emit it as a literal.
    ///
    /// Always `Ok(None)` when external linking is disabled.
    ///
    /// # Errors
    ///
    /// See [`LinkedDataResolver::resolve_external_uri`].
    pub fn external_uri(&self, property: &impl PropertyIdValue, value: &str) -> Result<Option<String>> {
        if !self.config.link_external_ids {
            return Ok(None);
        }
        self.resolver.resolve_external_uri(property, value)
    }

    /// `(term, rdf:type, kind)` declarations for the output header.
    ///
    /// Empty when vocabulary declarations are disabled.
    pub fn vocabulary_declarations(
        &self,
    ) -> impl Iterator<Item = (&'static str, &'static str, &'static str)> {
        let enabled = self.config.declare_vocabulary;
        known_vocabulary_types()
            .declarations()
            .filter(move |_| enabled)
    }
}

impl Default for ExportContext {
    fn default() -> Self {
        Self {
            config: ExportConfig::default(),
            uris: UriBuilder::default(),
            resolver: LinkedDataResolver::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datamodel::{ItemId, PropertyId, StatementRef};
    use crate::error::RdfError;

    #[test]
    fn test_default_context_uses_wikidata() {
        let ctx = ExportContext::default();
        assert_eq!(
            ctx.entity_uri(&ItemId::new("Q64")),
            "http://www.wikidata.org/entity/Q64"
        );
        assert_eq!(
            ctx.statement_uri(&StatementRef::new("Q64$1")),
            "http://www.wikidata.org/entity/Q64$1"
        );
        assert_eq!(
            ctx.property_uri(&PropertyId::new("P17"), PropertyContext::Statement),
            "http://www.wikidata.org/entity/P17s"
        );
    }

    #[test]
    fn test_custom_prefix() {
        let config = ExportConfig::new().with_entity_prefix("https://wiki.example.org/entity/");
        let ctx = ExportContext::new(config).unwrap();
        assert_eq!(ctx.uri_builder().prefix(), "https://wiki.example.org/entity/");
        assert_eq!(
            ctx.entity_uri(&ItemId::new("Q1")),
            "https://wiki.example.org/entity/Q1"
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExportConfig::new().with_entity_prefix("");
        assert!(matches!(ExportContext::new(config), Err(RdfError::Config(_))));
    }

    #[test]
    fn test_external_links_toggle() {
        let freebase = PropertyId::new("P646");
        let ctx = ExportContext::default();
        assert_eq!(
            ctx.external_uri(&freebase, "/m/0d05w3").unwrap().as_deref(),
            Some("http://rdf.freebase.com/ns/m.0d05w3")
        );

        let ctx = ExportContext::new(ExportConfig::new().with_external_links(false)).unwrap();
        assert_eq!(ctx.external_uri(&freebase, "/m/0d05w3").unwrap(), None);
        // Malformed values are not inspected when linking is off
        assert_eq!(ctx.external_uri(&freebase, "m/0d05w3").unwrap(), None);
    }

    #[test]
    fn test_replaced_resolver() {
        let ctx = ExportContext::default().with_resolver(LinkedDataResolver::empty());
        assert_eq!(
            ctx.external_uri(&PropertyId::new("P646"), "/m/0d05w3").unwrap(),
            None
        );
    }

    #[test]
    fn test_vocabulary_declarations_toggle() {
        let ctx = ExportContext::default();
        assert_eq!(
            ctx.vocabulary_declarations().count(),
            known_vocabulary_types().len()
        );

        let ctx =
            ExportContext::new(ExportConfig::new().with_vocabulary_declarations(false)).unwrap();
        assert_eq!(ctx.vocabulary_declarations().count(), 0);
    }
}
