//! Linked-data URIs for external identifier values.
//!
//! Some string properties hold identifiers from other RDF datasets. For those
//! properties a rule turns the raw value into the URI the other dataset uses,
//! so the export can link to it instead of emitting a plain literal.
//!
//! Rules are data: a table from property id to a named [`ExternalUriRule`].
//! The standard table knows one property, the Freebase ID (`P646`):
//!
//! ```
//! use wikibase_rdf::datamodel::PropertyId;
//! use wikibase_rdf::linked_data::LinkedDataResolver;
//!
//! let resolver = LinkedDataResolver::standard();
//! let uri = resolver
//!     .resolve_external_uri(&PropertyId::new("P646"), "/m/0d05w3")
//!     .unwrap();
//! assert_eq!(uri.as_deref(), Some("http://rdf.freebase.com/ns/m.0d05w3"));
//!
//! // No rule: render the value as a literal.
//! let none = resolver
//!     .resolve_external_uri(&PropertyId::new("P31"), "anything")
//!     .unwrap();
//! assert_eq!(none, None);
//! ```

use std::fmt;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::datamodel::PropertyIdValue;
use crate::error::{RdfError, Result};
use crate::vocabulary::{COMMONS_FILE, FREEBASE};

/// Property id of the Freebase ID property.
pub const FREEBASE_ID_PROPERTY: &str = "P646";

/// Turns a raw value into a URI, or explains why the value is malformed.
pub type UriTransform = fn(&str) -> std::result::Result<String, String>;

lazy_static! {
    // Leading separator, non-empty segments, nothing that breaks an IRI.
    static ref FREEBASE_ID_SHAPE: Regex = Regex::new(r#"^(/[^/\s<>"{}|\\^`]+)+$"#)
        .unwrap_or_else(|e| panic!("invalid Freebase id pattern: {e}"));

    static ref STANDARD_RESOLVER: LinkedDataResolver = {
        let resolver = LinkedDataResolver::standard();
        tracing::debug!(rules = resolver.rules().len(), "Built linked-data resolver");
        resolver
    };
}

/// A named transform from raw values of one property to external URIs.
#[derive(Clone, Copy)]
pub struct ExternalUriRule {
    name: &'static str,
    transform: UriTransform,
}

impl ExternalUriRule {
    /// Creates a rule.
    #[must_use]
    pub const fn new(name: &'static str, transform: UriTransform) -> Self {
        Self { name, transform }
    }

    /// The Freebase rule: `/m/0d05w3` becomes `http://rdf.freebase.com/ns/m.0d05w3`.
    #[must_use]
    pub const fn freebase() -> Self {
        Self::new("freebase", freebase_uri)
    }

    /// The rule name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the transform.
    ///
    /// # Errors
    ///
    /// Returns the reason the value was rejected.
    pub fn apply(&self, value: &str) -> std::result::Result<String, String> {
        (self.transform)(value)
    }
}

impl fmt::Debug for ExternalUriRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalUriRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Dispatches external identifier values to per-property rules.
#[derive(Debug, Clone, Default)]
pub struct LinkedDataResolver {
    rules: IndexMap<String, ExternalUriRule>,
}

impl LinkedDataResolver {
    /// A resolver with no rules; every value resolves to "no mapping".
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The resolver with the built-in rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty().with_rule(FREEBASE_ID_PROPERTY, ExternalUriRule::freebase())
    }

    /// Adds or replaces the rule for a property.
    #[must_use]
    pub fn with_rule(mut self, property_id: impl Into<String>, rule: ExternalUriRule) -> Self {
        self.rules.insert(property_id.into(), rule);
        self
    }

    /// The rule table, keyed by property id.
    #[must_use]
    pub const fn rules(&self) -> &IndexMap<String, ExternalUriRule> {
        &self.rules
    }

    /// Returns true if values of the property are rewritten.
    #[must_use]
    pub fn has_rule(&self, property_id: &str) -> bool {
        self.rules.contains_key(property_id)
    }

    /// Resolves a value of the given property to an external URI.
    ///
    /// Returns `Ok(None)` when the property has no rule; the caller should
    /// then use the value as it is.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::MalformedExternalId`] if the property has a rule
    /// and the value does not have the shape the rule expects.
    pub fn resolve_external_uri(
        &self,
        property: &impl PropertyIdValue,
        value: &str,
    ) -> Result<Option<String>> {
        let property_id = property.id();
        let Some(rule) = self.rules.get(property_id) else {
            return Ok(None);
        };
        tracing::trace!(property = property_id, rule = rule.name(), "Applying external URI rule");

        match rule.apply(value) {
            Ok(uri) => Ok(Some(uri)),
            Err(reason) => {
                tracing::warn!(
                    property = property_id,
                    value = value,
                    reason = %reason,
                    "Rejected malformed external identifier"
                );
                Err(RdfError::MalformedExternalId {
                    property: property_id.to_string(),
                    value: value.to_string(),
                    reason,
                })
            },
        }
    }
}

/// Resolves a value with the standard rule table.
///
/// # Errors
///
/// See [`LinkedDataResolver::resolve_external_uri`].
pub fn resolve_external_uri(property: &impl PropertyIdValue, value: &str) -> Result<Option<String>> {
    STANDARD_RESOLVER.resolve_external_uri(property, value)
}

/// Returns the Wikimedia Commons page URL of a media file.
#[must_use]
pub fn commons_page_url(page_name: &str) -> String {
    format!("{COMMONS_FILE}{}", page_name.replace(' ', "_"))
}

fn freebase_uri(value: &str) -> std::result::Result<String, String> {
    let Some(path) = value.strip_prefix('/') else {
        return Err("missing leading '/'".to_string());
    };
    if !FREEBASE_ID_SHAPE.is_match(value) {
        return Err("expected '/'-separated non-empty segments".to_string());
    }
    Ok(format!("{FREEBASE}{}", path.replace('/', ".")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datamodel::PropertyId;

    #[test]
    fn test_freebase_mid() {
        assert_eq!(
            freebase_uri("/m/0d05w3").unwrap(),
            "http://rdf.freebase.com/ns/m.0d05w3"
        );
        assert_eq!(
            freebase_uri("/g/11b6vxkq_m").unwrap(),
            "http://rdf.freebase.com/ns/g.11b6vxkq_m"
        );
    }

    #[test]
    fn test_freebase_rejects_malformed() {
        assert_eq!(freebase_uri("m/0d05w3").unwrap_err(), "missing leading '/'");
        assert!(freebase_uri("").is_err());
        assert!(freebase_uri("/").is_err());
        assert!(freebase_uri("/m//0d05w3").is_err());
        assert!(freebase_uri("/m/0d05w3/").is_err());
        assert!(freebase_uri("/m/0d 05w3").is_err());
    }

    #[test]
    fn test_resolve_without_rule() {
        let resolver = LinkedDataResolver::standard();
        assert_eq!(
            resolver
                .resolve_external_uri(&PropertyId::new("P214"), "anything")
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_resolve_malformed_reports_property() {
        let err = resolve_external_uri(&PropertyId::new("P646"), "m/0d05w3").unwrap_err();
        match err {
            RdfError::MalformedExternalId { property, value, .. } => {
                assert_eq!(property, "P646");
                assert_eq!(value, "m/0d05w3");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_rule() {
        fn viaf(value: &str) -> std::result::Result<String, String> {
            if value.chars().all(|c| c.is_ascii_digit()) && !value.is_empty() {
                Ok(format!("http://viaf.org/viaf/{value}"))
            } else {
                Err("expected digits".to_string())
            }
        }

        let resolver =
            LinkedDataResolver::standard().with_rule("P214", ExternalUriRule::new("viaf", viaf));
        assert!(resolver.has_rule("P214"));
        assert!(resolver.has_rule(FREEBASE_ID_PROPERTY));
        assert_eq!(
            resolver
                .resolve_external_uri(&PropertyId::new("P214"), "113230702")
                .unwrap()
                .as_deref(),
            Some("http://viaf.org/viaf/113230702")
        );
    }

    #[test]
    fn test_empty_resolver() {
        let resolver = LinkedDataResolver::empty();
        assert!(resolver.rules().is_empty());
        assert_eq!(
            resolver
                .resolve_external_uri(&PropertyId::new("P646"), "/m/0d05w3")
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_commons_page_url() {
        assert_eq!(
            commons_page_url("Example File.jpg"),
            "http://commons.wikimedia.org/wiki/File:Example_File.jpg"
        );
        assert_eq!(
            commons_page_url(""),
            "http://commons.wikimedia.org/wiki/File:"
        );
    }

    #[test]
    fn test_rule_debug_shows_name() {
        let debug = format!("{:?}", ExternalUriRule::freebase());
        assert!(debug.contains("freebase"));
    }
}
