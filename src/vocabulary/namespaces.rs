//! Namespace prefixes and vocabulary term URIs used in the export.
//!
//! Prefixes follow the Wikidata RDF export conventions; terms are grouped by
//! the vocabulary that defines them.

/// Wikidata entity namespace URI (items, properties, statements).
pub const WIKIDATA: &str = "http://www.wikidata.org/entity/";

/// Wikibase ontology namespace URI.
pub const WBONTO: &str = "http://www.wikidata.org/ontology#";

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

/// XML Schema namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// schema.org namespace.
pub const SCHEMA: &str = "http://schema.org/";

/// SKOS core namespace.
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

/// W3C provenance ontology namespace.
pub const PROV: &str = "http://www.w3.org/ns/prov#";

/// Freebase RDF namespace, target of Freebase ID values.
pub const FREEBASE: &str = "http://rdf.freebase.com/ns/";

/// Wikimedia Commons file page prefix.
pub const COMMONS_FILE: &str = "http://commons.wikimedia.org/wiki/File:";

/// All namespaces as `(prefix, uri)` pairs, in the order an export header lists them.
pub const PREFIXES: &[(&str, &str)] = &[
    ("wd", WIKIDATA),
    ("wo", WBONTO),
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("owl", OWL),
    ("xsd", XSD),
    ("schema", SCHEMA),
    ("skos", SKOS),
    ("prov", PROV),
];

/// Ontology language terms (RDF, RDFS, OWL).
pub mod lang {
    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
}

/// Terms borrowed from SKOS, schema.org and PROV.
pub mod external {
    /// `skos:altLabel` - alias of an entity.
    pub const SKOS_ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
    /// `schema:about` - links a site link article to its entity.
    pub const SCHEMA_ABOUT: &str = "http://schema.org/about";
    /// `schema:description` - entity description.
    pub const SCHEMA_DESCRIPTION: &str = "http://schema.org/description";
    /// `schema:inLanguage` - language of a site link article.
    pub const SCHEMA_IN_LANGUAGE: &str = "http://schema.org/inLanguage";
    /// `prov:wasDerivedFrom` - links a statement to its references.
    pub const PROV_WAS_DERIVED_FROM: &str = "http://www.w3.org/ns/prov#wasDerivedFrom";
}

/// Wikibase ontology terms.
pub mod wikibase {
    /// Item - class of Wikibase items.
    pub const ITEM: &str = "http://www.wikidata.org/ontology#Item";
    /// Property - class of Wikibase properties.
    pub const PROPERTY: &str = "http://www.wikidata.org/ontology#Property";
    /// Statement - class of Wikibase statements.
    pub const STATEMENT: &str = "http://www.wikidata.org/ontology#Statement";

    /// propertyType - datatype of a Wikibase property.
    pub const PROPERTY_TYPE: &str = "http://www.wikidata.org/ontology#propertyType";
    /// globe - globe of a coordinates value.
    pub const GLOBE: &str = "http://www.wikidata.org/ontology#globe";
    /// latitude - latitude of a coordinates value.
    pub const LATITUDE: &str = "http://www.wikidata.org/ontology#latitude";
    /// longitude - longitude of a coordinates value.
    pub const LONGITUDE: &str = "http://www.wikidata.org/ontology#longitude";
    /// gcPrecision - precision of a coordinates value.
    pub const GC_PRECISION: &str = "http://www.wikidata.org/ontology#gcPrecision";
    /// time - time point of a time value.
    pub const TIME: &str = "http://www.wikidata.org/ontology#time";
    /// timePrecision - precision of a time value.
    pub const TIME_PRECISION: &str = "http://www.wikidata.org/ontology#timePrecision";
    /// preferredCalendar - preferred calendar model of a time value.
    pub const PREFERRED_CALENDAR: &str = "http://www.wikidata.org/ontology#preferredCalendar";
}
