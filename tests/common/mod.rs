//! Common test helpers shared across the test suite.

use wikibase_rdf::datamodel::{EntityIdValue, PropertyIdValue, Statement};

/// Entity prefix of the default configuration.
#[allow(dead_code)]
pub const WD: &str = "http://www.wikidata.org/entity/";

/// A document-model property, standing in for a real entity model.
#[derive(Debug, Clone)]
pub struct DocumentProperty {
    pub id: String,
    #[allow(dead_code)]
    pub datatype: &'static str,
}

impl EntityIdValue for DocumentProperty {
    fn id(&self) -> &str {
        &self.id
    }
}

impl PropertyIdValue for DocumentProperty {}

/// A document-model statement carrying its GUID.
#[derive(Debug, Clone)]
pub struct DocumentStatement {
    pub guid: String,
    #[allow(dead_code)]
    pub main_property: DocumentProperty,
}

impl Statement for DocumentStatement {
    fn statement_id(&self) -> &str {
        &self.guid
    }
}

/// Creates a property as an entity model would hand it over.
#[allow(dead_code)]
pub fn property(id: &str, datatype: &'static str) -> DocumentProperty {
    DocumentProperty {
        id: id.to_string(),
        datatype,
    }
}

/// Creates a statement on `P31` with the given GUID.
#[allow(dead_code)]
pub fn statement(guid: &str) -> DocumentStatement {
    DocumentStatement {
        guid: guid.to_string(),
        main_property: property("P31", "wikibase-item"),
    }
}

/// Installs a test log writer once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
