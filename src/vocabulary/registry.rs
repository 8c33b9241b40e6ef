//! Registry of well-known vocabulary terms and their OWL declaration kinds.
//!
//! Declaring these kinds explicitly keeps an exported RDF document
//! self-contained, even when the ontologies it imports define more about some
//! of the terms.

use std::fmt;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{RdfError, Result};

use super::namespaces::{external, lang, wikibase};

/// The OWL declaration kind of a vocabulary term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwlKind {
    /// `owl:Class`
    Class,
    /// `owl:ObjectProperty`
    ObjectProperty,
    /// `owl:DatatypeProperty`
    DatatypeProperty,
}

impl OwlKind {
    /// All kinds.
    pub const ALL: [Self; 3] = [Self::Class, Self::ObjectProperty, Self::DatatypeProperty];

    /// Returns the OWL URI naming this kind, the object of an `rdf:type` declaration.
    #[must_use]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::Class => lang::OWL_CLASS,
            Self::ObjectProperty => lang::OWL_OBJECT_PROPERTY,
            Self::DatatypeProperty => lang::OWL_DATATYPE_PROPERTY,
        }
    }

    /// Returns the kind named by an OWL URI.
    #[must_use]
    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.uri() == uri)
    }
}

impl fmt::Display for OwlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "owl:Class"),
            Self::ObjectProperty => write!(f, "owl:ObjectProperty"),
            Self::DatatypeProperty => write!(f, "owl:DatatypeProperty"),
        }
    }
}

/// A registered vocabulary term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyTerm<'a> {
    /// Term URI.
    pub uri: &'a str,
    /// Declaration kind.
    pub kind: OwlKind,
}

/// The built-in vocabulary table.
pub const STANDARD_TERMS: &[(&str, OwlKind)] = &[
    // Ontology language
    (lang::OWL_CLASS, OwlKind::Class),
    (lang::OWL_OBJECT_PROPERTY, OwlKind::Class),
    (lang::OWL_DATATYPE_PROPERTY, OwlKind::Class),
    (lang::RDF_TYPE, OwlKind::ObjectProperty),
    (lang::RDFS_LABEL, OwlKind::DatatypeProperty),
    // Borrowed vocabularies
    (external::SKOS_ALT_LABEL, OwlKind::DatatypeProperty),
    (external::SCHEMA_ABOUT, OwlKind::ObjectProperty),
    (external::SCHEMA_DESCRIPTION, OwlKind::DatatypeProperty),
    (external::SCHEMA_IN_LANGUAGE, OwlKind::DatatypeProperty),
    (external::PROV_WAS_DERIVED_FROM, OwlKind::ObjectProperty),
    // Wikibase ontology
    (wikibase::ITEM, OwlKind::Class),
    (wikibase::PROPERTY, OwlKind::Class),
    (wikibase::STATEMENT, OwlKind::Class),
    (wikibase::PROPERTY_TYPE, OwlKind::ObjectProperty),
    (wikibase::GLOBE, OwlKind::ObjectProperty),
    (wikibase::LATITUDE, OwlKind::DatatypeProperty),
    (wikibase::LONGITUDE, OwlKind::DatatypeProperty),
    (wikibase::GC_PRECISION, OwlKind::DatatypeProperty),
    (wikibase::TIME, OwlKind::DatatypeProperty),
    (wikibase::TIME_PRECISION, OwlKind::DatatypeProperty),
    (wikibase::PREFERRED_CALENDAR, OwlKind::ObjectProperty),
];

/// Terms every standard registry must contain.
pub const REQUIRED_TERMS: &[&str] = &[
    lang::OWL_CLASS,
    lang::OWL_OBJECT_PROPERTY,
    lang::OWL_DATATYPE_PROPERTY,
    wikibase::ITEM,
    wikibase::PROPERTY,
    wikibase::STATEMENT,
    wikibase::PROPERTY_TYPE,
    wikibase::GLOBE,
    wikibase::LATITUDE,
    wikibase::LONGITUDE,
    wikibase::GC_PRECISION,
    wikibase::TIME,
    wikibase::TIME_PRECISION,
    wikibase::PREFERRED_CALENDAR,
];

lazy_static! {
    static ref KNOWN_VOCABULARY: VocabularyRegistry = init_known_vocabulary();
}

fn init_known_vocabulary() -> VocabularyRegistry {
    match VocabularyRegistry::standard() {
        Ok(registry) => {
            tracing::debug!(terms = registry.len(), "Built vocabulary registry");
            registry
        },
        Err(e) => panic!("built-in vocabulary table is inconsistent: {e}"),
    }
}

/// Returns the process-wide registry of known vocabulary terms.
///
/// Built on first access and never mutated afterwards.
///
/// # Panics
///
/// Panics on first access if the built-in table has a duplicate or missing
/// registration; no export can be correct without a complete table.
#[must_use]
pub fn known_vocabulary_types() -> &'static VocabularyRegistry {
    &KNOWN_VOCABULARY
}

/// Immutable mapping from vocabulary URI to [`OwlKind`].
///
/// Iteration follows registration order, so ontology headers come out the
/// same on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyRegistry {
    terms: IndexMap<String, OwlKind>,
}

impl VocabularyRegistry {
    /// Starts a new builder with no requirements.
    #[must_use]
    pub fn builder() -> VocabularyRegistryBuilder {
        VocabularyRegistryBuilder::new()
    }

    /// Builds the standard registry from [`STANDARD_TERMS`], checked against [`REQUIRED_TERMS`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the table has a duplicate or lacks a
    /// required term.
    pub fn standard() -> Result<Self> {
        VocabularyRegistryBuilder::new()
            .with_required(REQUIRED_TERMS)
            .register_all(STANDARD_TERMS)?
            .build()
    }

    /// Returns the declaration kind of a term.
    #[must_use]
    pub fn get(&self, uri: &str) -> Option<OwlKind> {
        self.terms.get(uri).copied()
    }

    /// Returns true if the term is registered.
    #[must_use]
    pub fn contains(&self, uri: &str) -> bool {
        self.terms.contains_key(uri)
    }

    /// Returns the number of registered terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no term is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Read-only view of the whole mapping.
    #[must_use]
    pub const fn as_map(&self) -> &IndexMap<String, OwlKind> {
        &self.terms
    }

    /// Iterates over the terms in registration order.
    pub fn iter(&self) -> impl Iterator<Item = VocabularyTerm<'_>> {
        self.terms.iter().map(|(uri, kind)| VocabularyTerm {
            uri: uri.as_str(),
            kind: *kind,
        })
    }

    /// Iterates over the URIs of all terms of one kind.
    pub fn terms_of_kind(&self, kind: OwlKind) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .filter(move |(_, k)| **k == kind)
            .map(|(uri, _)| uri.as_str())
    }

    /// Yields one `(term, rdf:type, kind)` URI triple per registered term.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &'static str, &'static str)> {
        self.iter()
            .map(|term| (term.uri, lang::RDF_TYPE, term.kind.uri()))
    }
}

/// Declarative builder for a [`VocabularyRegistry`].
#[derive(Debug, Clone, Default)]
pub struct VocabularyRegistryBuilder {
    terms: IndexMap<String, OwlKind>,
    required: Vec<String>,
}

impl VocabularyRegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds terms that [`build`](Self::build) must find registered.
    #[must_use]
    pub fn with_required(mut self, uris: &[&str]) -> Self {
        self.required.extend(uris.iter().map(|uri| (*uri).to_string()));
        self
    }

    /// Registers one term.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::DuplicateVocabularyTerm`] if the URI is already registered.
    pub fn register(mut self, uri: impl Into<String>, kind: OwlKind) -> Result<Self> {
        let uri = uri.into();
        if self.terms.contains_key(&uri) {
            return Err(RdfError::DuplicateVocabularyTerm(uri));
        }
        self.terms.insert(uri, kind);
        Ok(self)
    }

    /// Registers every `(uri, kind)` pair of a table.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::DuplicateVocabularyTerm`] on the first repeated URI.
    pub fn register_all(self, table: &[(&str, OwlKind)]) -> Result<Self> {
        table
            .iter()
            .try_fold(self, |builder, (uri, kind)| builder.register(*uri, *kind))
    }

    /// Freezes the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::MissingVocabularyTerm`] for the first required term
    /// that was never registered.
    pub fn build(self) -> Result<VocabularyRegistry> {
        if let Some(missing) = self.required.iter().find(|uri| !self.terms.contains_key(*uri)) {
            return Err(RdfError::MissingVocabularyTerm(missing.clone()));
        }
        Ok(VocabularyRegistry { terms: self.terms })
    }
}
