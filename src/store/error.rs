//! Store Errors
//!
//! Error types for persistence operations.

use std::fmt;

/// Postgres SQLSTATE codes classified by the API
const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";
const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";
const SQLSTATE_NOT_NULL_VIOLATION: &str = "23502";
const SQLSTATE_STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// Integrity constraint reported by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    ForeignKey,
    Unique,
    NotNull,
    ValueTooLong,
}

impl ConstraintKind {
    /// Map a Postgres SQLSTATE code to a constraint kind
    pub fn from_sqlstate(code: &str) -> Option<Self> {
        match code {
            SQLSTATE_FOREIGN_KEY_VIOLATION => Some(Self::ForeignKey),
            SQLSTATE_UNIQUE_VIOLATION => Some(Self::Unique),
            SQLSTATE_NOT_NULL_VIOLATION => Some(Self::NotNull),
            SQLSTATE_STRING_DATA_RIGHT_TRUNCATION => Some(Self::ValueTooLong),
            _ => None,
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ForeignKey => "foreign key violation",
            Self::Unique => "unique violation",
            Self::NotNull => "not-null violation",
            Self::ValueTooLong => "value too long",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in a store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Constraint violation raised by a backend without SQLSTATE codes
    #[error("{kind}: {message}")]
    Constraint { kind: ConstraintKind, message: String },

    /// Stored value could not be mapped back into a domain type
    #[error("Corrupt record: {0}")]
    Corrupt(#[from] crate::domain::ParseEnumError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn constraint(kind: ConstraintKind, message: impl Into<String>) -> Self {
        Self::Constraint {
            kind,
            message: message.into(),
        }
    }

    /// Constraint that caused this error, if the backend reported one
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            StoreError::Constraint { kind, .. } => Some(*kind),
            StoreError::Database(sqlx::Error::Database(db_err)) => db_err
                .code()
                .and_then(|code| ConstraintKind::from_sqlstate(&code)),
            _ => None,
        }
    }

    /// Backend message describing the violated constraint
    pub fn constraint_message(&self) -> Option<String> {
        match self {
            StoreError::Constraint { message, .. } => Some(message.clone()),
            StoreError::Database(sqlx::Error::Database(db_err)) if self.constraint_kind().is_some() => {
                Some(db_err.message().to_string())
            }
            _ => None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
