//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Domain-specific errors
///
/// These errors represent business rule violations.
/// They are independent of the web/infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Referenced operation type does not exist.
    /// Rendered as a malformed request, not a missing resource.
    #[error("operation type record not found: {0}")]
    OperationTypeNotFound(i64),
}

/// Text that does not name a variant of a domain enum
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseEnumError {
    #[error("Invalid entry type: {0}")]
    EntryType(String),

    #[error("Invalid transaction status: {0}")]
    TransactionStatus(String),
}
