//! Well-known vocabulary terms for the RDF export.
//!
//! The export mixes terms from the ontology languages themselves (RDF, RDFS,
//! OWL), a few borrowed vocabularies (SKOS, schema.org, PROV) and the Wikibase
//! ontology. Each term is registered once with its OWL declaration kind so a
//! driver can start every document with self-contained declarations:
//!
//! ```
//! use wikibase_rdf::vocabulary::{known_vocabulary_types, wikibase, OwlKind};
//!
//! let registry = known_vocabulary_types();
//! assert_eq!(registry.get(wikibase::STATEMENT), Some(OwlKind::Class));
//!
//! for (subject, predicate, object) in registry.declarations() {
//!     println!("<{subject}> <{predicate}> <{object}> .");
//! }
//! ```

mod namespaces;
mod registry;

pub use namespaces::{
    external, lang, wikibase, COMMONS_FILE, FREEBASE, OWL, PREFIXES, PROV, RDF, RDFS, SCHEMA,
    SKOS, WBONTO, WIKIDATA, XSD,
};
pub use registry::{
    known_vocabulary_types, OwlKind, VocabularyRegistry, VocabularyRegistryBuilder,
    VocabularyTerm, REQUIRED_TERMS, STANDARD_TERMS,
};
