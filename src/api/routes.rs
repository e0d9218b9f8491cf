//! API Routes
//!
//! HTTP endpoint definitions. Handlers only translate between HTTP and the
//! [`TransactionService`](crate::service::TransactionService).

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::{Account, OperationContext, Transaction};
use crate::error::AppError;
use crate::service::{CreateAccountCommand, CreateTransactionCommand};

use super::extract::{EntityId, ValidatedJson, Validate};
use super::AppState;

// =========================================================================
// Request types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub document_number: String,
}

impl Validate for CreateAccountRequest {
    fn validate(&self) -> Result<(), Vec<String>> {
        if self.document_number.is_empty() {
            return Err(vec!["document_number: must not be empty".to_string()]);
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub account_id: i64,
    pub operation_type_id: i64,
    /// Decimal string or JSON number, parsed from its text without rounding
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub amount: Decimal,
}

impl Validate for CreateTransactionRequest {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut violations = Vec::new();
        if self.account_id == 0 {
            violations.push("account_id: is required".to_string());
        }
        if self.operation_type_id == 0 {
            violations.push("operation_type_id: is required".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/accounts", post(create_account))
        .route("/accounts/:id", get(get_account))
        .route("/transactions", post(create_transaction).get(list_transactions))
}

/// Liveness probe
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// =========================================================================
// POST /accounts
// =========================================================================

async fn create_account(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    ValidatedJson(request): ValidatedJson<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let account = state
        .service
        .create_account(CreateAccountCommand::new(request.document_number), &context)
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

// =========================================================================
// GET /accounts/:id
// =========================================================================

async fn get_account(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Account>, AppError> {
    let account = state
        .service
        .get_account_by_id(id)
        .await?
        .ok_or(AppError::AccountNotFound(id))?;

    Ok(Json(account))
}

// =========================================================================
// POST /transactions
// =========================================================================

async fn create_transaction(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    ValidatedJson(request): ValidatedJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let command = CreateTransactionCommand::new(
        request.account_id,
        request.operation_type_id,
        request.amount,
    );

    let transaction = state.service.create_transaction(command, &context).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

// =========================================================================
// GET /transactions
// =========================================================================

async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    Ok(Json(state.service.get_transactions().await?))
}
