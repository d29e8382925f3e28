//! Domain layer errors.
//!
//! This module defines errors that can occur within the domain layer,
//! representing business rule violations and entity-level errors.

use thiserror::Error;

/// Domain layer error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Write rejected because it would break an invariant of the stored row.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Persistence layer error (abstracted).
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
