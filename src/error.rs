//! Error types for URI mapping operations.
//!
//! This module provides the [`RdfError`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all URI mapping operations.
///
/// "No mapping" for an external identifier is not an error; resolvers
/// report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfError {
    /// A vocabulary URI was registered twice.
    #[error("Duplicate vocabulary term: {0}")]
    DuplicateVocabularyTerm(String),

    /// A vocabulary URI required for self-contained exports was never registered.
    #[error("Missing vocabulary term: {0}")]
    MissingVocabularyTerm(String),

    /// An external identifier value does not have the shape its rule expects.
    #[error("Malformed external identifier {value:?} for property {property}: {reason}")]
    MalformedExternalId {
        /// Id of the property the value belongs to.
        property: String,
        /// The raw statement value.
        value: String,
        /// What is wrong with the value.
        reason: String,
    },

    /// A string could not be turned into an RDF IRI.
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Invalid export configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RdfError {
    /// Returns true if this error belongs to the startup-time configuration class.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateVocabularyTerm(_) | Self::MissingVocabularyTerm(_) | Self::Config(_)
        )
    }
}

/// Convenience type alias for [`std::result::Result`] with [`RdfError`].
pub type Result<T> = std::result::Result<T, RdfError>;
