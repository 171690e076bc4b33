//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed tree input.
/// Tree operations themselves are total and never produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid value at position {position}: {token:?}")]
    InvalidToken { position: usize, token: String },

    #[error("value at index {index} has no parent node")]
    OrphanNode { index: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
