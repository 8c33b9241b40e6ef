//! Canonical URIs for entities, statements and properties.
//!
//! Entity and statement URIs are the entity prefix followed by the id. A
//! property needs four distinct nodes in the exported graph, one per
//! [`PropertyContext`], so its URI also carries a one-letter suffix:
//!
//! | Context     | Suffix | Example                                   |
//! |-------------|--------|-------------------------------------------|
//! | `Statement` | `s`    | `http://www.wikidata.org/entity/P31s`     |
//! | `Value`     | `v`    | `http://www.wikidata.org/entity/P31v`     |
//! | `Qualifier` | `q`    | `http://www.wikidata.org/entity/P31q`     |
//! | `Reference` | `r`    | `http://www.wikidata.org/entity/P31r`     |
//!
//! Suffixes are part of published data and must never change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::datamodel::{EntityIdValue, PropertyIdValue, Statement};
use crate::vocabulary::WIKIDATA;

/// The role a property plays when it is turned into a URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyContext {
    /// Predicate linking an entity to a statement node.
    Statement,
    /// Predicate linking a statement node to its value.
    Value,
    /// Predicate of a qualifier on a statement.
    Qualifier,
    /// Predicate inside a reference record.
    Reference,
}

impl PropertyContext {
    /// All contexts, in suffix table order.
    pub const ALL: [Self; 4] = [Self::Statement, Self::Value, Self::Qualifier, Self::Reference];

    /// The suffix appended to the property id in this context.
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Statement => 's',
            Self::Value => 'v',
            Self::Qualifier => 'q',
            Self::Reference => 'r',
        }
    }

    /// The context using the given suffix, if any.
    #[must_use]
    pub const fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            's' => Some(Self::Statement),
            'v' => Some(Self::Value),
            'q' => Some(Self::Qualifier),
            'r' => Some(Self::Reference),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Statement => write!(f, "statement"),
            Self::Value => write!(f, "value"),
            Self::Qualifier => write!(f, "qualifier"),
            Self::Reference => write!(f, "reference"),
        }
    }
}

/// Builds URIs under one entity prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriBuilder {
    prefix: String,
}

impl Default for UriBuilder {
    fn default() -> Self {
        Self::new(WIKIDATA)
    }
}

impl UriBuilder {
    /// Creates a builder for the given entity prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The entity prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// URI of an item, property or other entity.
    #[must_use]
    pub fn entity_uri(&self, entity: &impl EntityIdValue) -> String {
        self.join(entity.id(), None)
    }

    /// URI of a statement node.
    #[must_use]
    pub fn statement_uri(&self, statement: &impl Statement) -> String {
        self.join(statement.statement_id(), None)
    }

    /// URI of a property used in the given context.
    #[must_use]
    pub fn property_uri(&self, property: &impl PropertyIdValue, context: PropertyContext) -> String {
        self.join(property.id(), Some(context.suffix()))
    }

    /// The property URIs for every context, ordered as [`PropertyContext::ALL`].
    #[must_use]
    pub fn property_uris(&self, property: &impl PropertyIdValue) -> [String; 4] {
        PropertyContext::ALL.map(|context| self.property_uri(property, context))
    }

    /// Splits a property URI built by this builder into property id and context.
    ///
    /// Returns `None` for URIs outside the prefix, without a known suffix, or
    /// with an empty id.
    #[must_use]
    pub fn parse_property_uri(&self, uri: &str) -> Option<(String, PropertyContext)> {
        let local = uri.strip_prefix(self.prefix.as_str())?;
        let suffix = local.chars().next_back()?;
        let context = PropertyContext::from_suffix(suffix)?;
        let id = &local[..local.len() - suffix.len_utf8()];
        if id.is_empty() {
            return None;
        }
        Some((id.to_string(), context))
    }

    fn join(&self, id: &str, suffix: Option<char>) -> String {
        let mut uri = String::with_capacity(self.prefix.len() + id.len() + 1);
        uri.push_str(&self.prefix);
        uri.push_str(id);
        if let Some(suffix) = suffix {
            uri.push(suffix);
        }
        uri
    }
}

/// URI of an entity under the Wikidata entity prefix.
#[must_use]
pub fn entity_uri(entity: &impl EntityIdValue) -> String {
    format!("{WIKIDATA}{}", entity.id())
}

/// URI of a statement under the Wikidata entity prefix.
#[must_use]
pub fn statement_uri(statement: &impl Statement) -> String {
    format!("{WIKIDATA}{}", statement.statement_id())
}

/// URI of a property in context under the Wikidata entity prefix.
#[must_use]
pub fn property_uri(property: &impl PropertyIdValue, context: PropertyContext) -> String {
    format!("{WIKIDATA}{}{}", property.id(), context.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datamodel::{ItemId, PropertyId, StatementRef};

    #[test]
    fn test_property_uri_qualifier() {
        assert_eq!(
            property_uri(&PropertyId::new("P31"), PropertyContext::Qualifier),
            "http://www.wikidata.org/entity/P31q"
        );
    }

    #[test]
    fn test_entity_and_statement_uri() {
        assert_eq!(
            entity_uri(&ItemId::new("Q42")),
            "http://www.wikidata.org/entity/Q42"
        );
        assert_eq!(
            statement_uri(&StatementRef::new("Q42$abc")),
            "http://www.wikidata.org/entity/Q42$abc"
        );
    }

    #[test]
    fn test_suffixes_distinct() {
        let mut suffixes: Vec<char> = PropertyContext::ALL.iter().map(|c| c.suffix()).collect();
        suffixes.sort_unstable();
        suffixes.dedup();
        assert_eq!(suffixes.len(), PropertyContext::ALL.len());
    }

    #[test]
    fn test_from_suffix_inverts_suffix() {
        for context in PropertyContext::ALL {
            assert_eq!(PropertyContext::from_suffix(context.suffix()), Some(context));
        }
        assert_eq!(PropertyContext::from_suffix('x'), None);
    }

    #[test]
    fn test_builder_matches_free_functions() {
        let builder = UriBuilder::default();
        let property = PropertyId::new("P569");
        for context in PropertyContext::ALL {
            assert_eq!(
                builder.property_uri(&property, context),
                property_uri(&property, context)
            );
        }
        let item = ItemId::new("Q1");
        assert_eq!(builder.entity_uri(&item), entity_uri(&item));
    }

    #[test]
    fn test_custom_prefix() {
        let builder = UriBuilder::new("http://example.org/entity/");
        assert_eq!(
            builder.property_uri(&PropertyId::new("P1"), PropertyContext::Reference),
            "http://example.org/entity/P1r"
        );
    }

    #[test]
    fn test_property_uris_order() {
        let uris = UriBuilder::default().property_uris(&PropertyId::new("P7"));
        assert_eq!(
            uris,
            [
                "http://www.wikidata.org/entity/P7s",
                "http://www.wikidata.org/entity/P7v",
                "http://www.wikidata.org/entity/P7q",
                "http://www.wikidata.org/entity/P7r",
            ]
        );
    }

    #[test]
    fn test_parse_property_uri() {
        let builder = UriBuilder::default();
        assert_eq!(
            builder.parse_property_uri("http://www.wikidata.org/entity/P31v"),
            Some(("P31".to_string(), PropertyContext::Value))
        );
        assert_eq!(
            builder.parse_property_uri("http://www.wikidata.org/entity/Q42"),
            None
        );
        assert_eq!(builder.parse_property_uri("http://www.wikidata.org/entity/s"), None);
        assert_eq!(builder.parse_property_uri("http://example.org/P31v"), None);
    }

    #[test]
    fn test_context_serde() {
        let json = serde_json::to_string(&PropertyContext::Qualifier).unwrap();
        assert_eq!(json, "\"qualifier\"");
        let back: PropertyContext = serde_json::from_str("\"reference\"").unwrap();
        assert_eq!(back, PropertyContext::Reference);
        assert_eq!(PropertyContext::Value.to_string(), "value");
    }
}
