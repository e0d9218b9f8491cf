//! Customer accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer account keyed by a caller-supplied document number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub document_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account data before the store assigns an id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub document_number: String,
}

impl NewAccount {
    pub fn new(document_number: impl Into<String>) -> Self {
        Self {
            document_number: document_number.into(),
        }
    }
}
