//! Error handling module
//!
//! Centralized error types and HTTP response conversion. This is the only
//! place where errors are turned into responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::store::{ConstraintKind, StoreError};

/// Message returned for every 500; the detail is only logged
pub const INTERNAL_SERVER_MESSAGE: &str = "internal server error";

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("{0}")]
    Validation(String),

    #[error("account not found: {0}")]
    AccountNotFound(i64),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Persistence errors, classified by constraint
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Error detail inside the response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Error response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: u16,
    pub error: ErrorBody,
}

impl AppError {
    /// Status, machine-readable code and caller-facing message
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // 400 Bad Request
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),

            // 404 Not Found
            AppError::AccountNotFound(_) => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }

            // Unknown operation type is bad input, not a missing resource
            AppError::Domain(domain_err @ DomainError::OperationTypeNotFound(_)) => (
                StatusCode::BAD_REQUEST,
                "operation_type_not_found",
                domain_err.to_string(),
            ),

            // Constraint violations are 4xx, anything else is 500
            AppError::Store(store_err) => classify_store_error(store_err),
        }
    }
}

fn internal(code: &'static str) -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        code,
        INTERNAL_SERVER_MESSAGE.to_string(),
    )
}

fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    let Some(kind) = err.constraint_kind() else {
        tracing::error!("Database error: {:?}", err);
        return internal("database_error");
    };

    let detail = err.constraint_message().unwrap_or_default();
    let (status, code, prefix) = match kind {
        ConstraintKind::ForeignKey => (
            StatusCode::BAD_REQUEST,
            "foreign_key_violation",
            "Foreign key constraint failed: ",
        ),
        ConstraintKind::Unique => (
            StatusCode::CONFLICT,
            "duplicate_record",
            "Duplicate record error: ",
        ),
        ConstraintKind::ValueTooLong => (
            StatusCode::BAD_REQUEST,
            "value_too_long",
            "Data too long for column: ",
        ),
        ConstraintKind::NotNull => (
            StatusCode::BAD_REQUEST,
            "missing_required_field",
            "Missing required field: ",
        ),
    };

    tracing::debug!("Constraint violation ({}): {}", kind, detail);
    (status, code, format!("{}{}", prefix, detail))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = self.classify();

        let body = ErrorResponse {
            success: false,
            code: status.as_u16(),
            error: ErrorBody {
                code: error_code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}
