//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant describes a single rejected operation. None of them is fatal:
/// the state the operation targeted is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (empty name, unparsable or out-of-range cost).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An entity with the same identity already exists.
    #[error("duplicate entity: {0}")]
    DuplicateEntity(String),

    /// The operation referenced an entity that does not exist.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::DuplicateEntity(msg.into())
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::UnknownEntity(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateEntity(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownEntity(_))
    }
}
