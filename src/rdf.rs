//! Conversion of generated URIs into `oxrdf` terms.
//!
//! Available with the `rdf-terms` feature. The string-producing API never
//! checks IRI syntax; these helpers do, so a driver handing terms to an
//! `oxrdf`-based serializer gets an error instead of a broken document.

use oxrdf::{NamedNode, Triple};

use crate::datamodel::{EntityIdValue, PropertyIdValue, Statement};
use crate::error::{RdfError, Result};
use crate::uri::{PropertyContext, UriBuilder};
use crate::vocabulary::VocabularyRegistry;

/// Parses a URI into a named node.
///
/// # Errors
///
/// Returns [`RdfError::InvalidIri`] if the string is not a valid IRI.
pub fn named_node(uri: impl Into<String>) -> Result<NamedNode> {
    let uri = uri.into();
    NamedNode::new(uri.as_str()).map_err(|e| RdfError::InvalidIri(format!("{uri}: {e}")))
}

impl VocabularyRegistry {
    /// Declaration triples (`term rdf:type kind`) for every registered term.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::InvalidIri`] if a registered URI is not a valid IRI.
    pub fn declaration_triples(&self) -> Result<Vec<Triple>> {
        self.declarations()
            .map(|(subject, predicate, object)| {
                Ok(Triple::new(
                    named_node(subject)?,
                    named_node(predicate)?,
                    named_node(object)?,
                ))
            })
            .collect()
    }
}

impl UriBuilder {
    /// [`entity_uri`](Self::entity_uri) as a named node.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::InvalidIri`] if the id does not form a valid IRI.
    pub fn entity_node(&self, entity: &impl EntityIdValue) -> Result<NamedNode> {
        named_node(self.entity_uri(entity))
    }

    /// [`statement_uri`](Self::statement_uri) as a named node.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::InvalidIri`] if the id does not form a valid IRI.
    pub fn statement_node(&self, statement: &impl Statement) -> Result<NamedNode> {
        named_node(self.statement_uri(statement))
    }

    /// [`property_uri`](Self::property_uri) as a named node.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::InvalidIri`] if the id does not form a valid IRI.
    pub fn property_node(
        &self,
        property: &impl PropertyIdValue,
        context: PropertyContext,
    ) -> Result<NamedNode> {
        named_node(self.property_uri(property, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{NamedOrBlankNode, Term};

    use crate::datamodel::{ItemId, PropertyId};
    use crate::vocabulary::{known_vocabulary_types, lang, wikibase};

    #[test]
    fn test_declaration_triples() {
        let registry = known_vocabulary_types();
        let triples = registry.declaration_triples().expect("registry IRIs are valid");
        assert_eq!(triples.len(), registry.len());

        let item = NamedNode::new(wikibase::ITEM).unwrap();
        let owl_class = NamedNode::new(lang::OWL_CLASS).unwrap();
        assert!(triples.iter().any(|t| {
            t.subject == NamedOrBlankNode::from(item.clone())
                && t.predicate.as_str() == lang::RDF_TYPE
                && t.object == Term::from(owl_class.clone())
        }));
    }

    #[test]
    fn test_property_node() {
        let node = UriBuilder::default()
            .property_node(&PropertyId::new("P31"), PropertyContext::Value)
            .unwrap();
        assert_eq!(node.as_str(), "http://www.wikidata.org/entity/P31v");
    }

    #[test]
    fn test_invalid_iri() {
        let err = UriBuilder::default()
            .entity_node(&ItemId::new("Q 1"))
            .unwrap_err();
        assert!(matches!(err, RdfError::InvalidIri(_)));
    }
}
