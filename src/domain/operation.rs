//! Operation types
//!
//! Seeded reference data classifying why a transaction was made.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;

/// Credit or debit classification of an operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Credit,
    Debit,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Credit => "credit",
            EntryType::Debit => "debit",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(EntryType::Credit),
            "debit" => Ok(EntryType::Debit),
            other => Err(ParseEnumError::EntryType(other.to_string())),
        }
    }
}

/// Operation type record (read-only to the application)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationType {
    pub id: i64,
    pub description: String,
    pub entry_type: EntryType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_parse() {
        assert_eq!("credit".parse::<EntryType>().unwrap(), EntryType::Credit);
        assert_eq!("debit".parse::<EntryType>().unwrap(), EntryType::Debit);
        assert_eq!(
            "Debit".parse::<EntryType>(),
            Err(ParseEnumError::EntryType("Debit".to_string()))
        );
    }

    #[test]
    fn test_entry_type_serializes_lowercase() {
        let json = serde_json::to_string(&EntryType::Debit).unwrap();
        assert_eq!(json, "\"debit\"");
    }
}
