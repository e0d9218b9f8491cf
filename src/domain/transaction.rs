//! Transactions
//!
//! Signed monetary movements recorded against an account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;

/// Transaction settlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TransactionStatus::Pending),
            "completed" => Ok(TransactionStatus::Completed),
            "failed" => Ok(TransactionStatus::Failed),
            other => Err(ParseEnumError::TransactionStatus(other.to_string())),
        }
    }
}

/// Persisted transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub operation_type_id: i64,
    /// Signed amount: positive for credit operations, negative for debit
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub event_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Transaction data before the store assigns an id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub account_id: i64,
    pub operation_type_id: i64,
    pub amount: Decimal,
    pub status: TransactionStatus,
}
