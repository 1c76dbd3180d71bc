//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A memory category label could not be parsed.
    #[error("unknown memory category: {0}")]
    UnknownCategory(String),

    /// An artifact kind label could not be parsed.
    #[error("unknown artifact kind: {0}")]
    UnknownArtifactKind(String),

    /// An attribute name is empty or otherwise unusable as a key.
    #[error("invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
