#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # wikibase-rdf: URIs for Wikibase RDF exports
//!
//! Deterministic mapping from Wikibase entity-model identifiers to the URIs
//! used when exporting items, properties and statements as RDF/OWL.
//!
//! ## Quick Start
//!
//! ```
//! use wikibase_rdf::datamodel::{ItemId, PropertyId};
//! use wikibase_rdf::{commons_page_url, entity_uri, property_uri, PropertyContext};
//!
//! assert_eq!(entity_uri(&ItemId::new("Q42")), "http://www.wikidata.org/entity/Q42");
//! assert_eq!(
//!     property_uri(&PropertyId::new("P31"), PropertyContext::Qualifier),
//!     "http://www.wikidata.org/entity/P31q"
//! );
//! assert_eq!(
//!     commons_page_url("Example File.jpg"),
//!     "http://commons.wikimedia.org/wiki/File:Example_File.jpg"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`vocabulary`] — Namespaces, vocabulary terms and the registry of OWL declaration kinds
//! - [`uri`] — Entity, statement and property-in-context URIs
//! - [`linked_data`] — External identifier values as linked-data URIs
//! - [`datamodel`] — Identifier accessor traits of the entity model
//! - [`config`] — Export configuration
//! - [`export`] — All of the above bundled for an export driver
//! - [`error`] — Error types and result type
//! - `rdf` — `oxrdf` terms for generated URIs (feature `rdf-terms`)

pub mod config;
pub mod datamodel;
pub mod error;
pub mod export;
pub mod linked_data;
#[cfg(feature = "rdf-terms")]
pub mod rdf;
pub mod uri;
pub mod vocabulary;

pub use config::ExportConfig;
pub use error::{RdfError, Result};
pub use export::ExportContext;
pub use linked_data::{commons_page_url, resolve_external_uri, ExternalUriRule, LinkedDataResolver};
pub use uri::{entity_uri, property_uri, statement_uri, PropertyContext, UriBuilder};
pub use vocabulary::{known_vocabulary_types, OwlKind, VocabularyRegistry};
