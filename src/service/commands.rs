//! Command definitions
//!
//! Commands represent intentions to change the system state.

use rust_decimal::Decimal;

/// Command to open a customer account
#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
    pub document_number: String,
}

impl CreateAccountCommand {
    pub fn new(document_number: impl Into<String>) -> Self {
        Self {
            document_number: document_number.into(),
        }
    }
}

/// Command to record a transaction against an account
#[derive(Debug, Clone)]
pub struct CreateTransactionCommand {
    pub account_id: i64,
    pub operation_type_id: i64,
    /// Caller-supplied amount; only its magnitude is kept
    pub amount: Decimal,
}

impl CreateTransactionCommand {
    pub fn new(account_id: i64, operation_type_id: i64, amount: Decimal) -> Self {
        Self {
            account_id,
            operation_type_id,
            amount,
        }
    }
}
