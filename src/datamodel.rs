//! Identifier accessors of the entity document model.
//!
//! The URI layer never looks inside entity documents. It only needs the
//! identifier strings, obtained through the traits in this module. Document
//! models implement them for their own types; [`ItemId`], [`PropertyId`] and
//! [`StatementRef`] are small owned implementations for callers that only
//! hold the raw ids.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An entity identifier (item, property, or any other entity-like id).
pub trait EntityIdValue {
    /// The opaque, non-empty id string (e.g. `Q42`).
    fn id(&self) -> &str;
}

/// A property identifier.
pub trait PropertyIdValue: EntityIdValue {}

/// A statement that carries its own identifier.
pub trait Statement {
    /// The statement id, assumed unique and URL-safe.
    fn statement_id(&self) -> &str;
}

impl<T: EntityIdValue + ?Sized> EntityIdValue for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: PropertyIdValue + ?Sized> PropertyIdValue for &T {}

impl<T: Statement + ?Sized> Statement for &T {
    fn statement_id(&self) -> &str {
        (**self).statement_id()
    }
}

/// Owned item id, such as `Q1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an item id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl EntityIdValue for ItemId {
    fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owned property id, such as `P31`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    /// Creates a property id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl EntityIdValue for PropertyId {
    fn id(&self) -> &str {
        &self.0
    }
}

impl PropertyIdValue for PropertyId {}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A statement known only by its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementRef(String);

impl StatementRef {
    /// Creates a statement reference from its id.
    #[must_use]
    pub fn new(statement_id: impl Into<String>) -> Self {
        Self(statement_id.into())
    }
}

impl Statement for StatementRef {
    fn statement_id(&self) -> &str {
        &self.0
    }
}
