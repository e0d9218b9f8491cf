//! Domain module
//!
//! Core domain types and business logic.

pub mod account;
pub mod amount;
pub mod context;
pub mod error;
pub mod operation;
pub mod transaction;

pub use account::{Account, NewAccount};
pub use amount::normalize_amount;
pub use context::OperationContext;
pub use error::{DomainError, ParseEnumError};
pub use operation::{EntryType, OperationType};
pub use transaction::{NewTransaction, Transaction, TransactionStatus};
