//! Service module
//!
//! Application service that applies the ledger's business rules on top of the
//! store contracts.

mod commands;
mod transaction_service;

pub use commands::*;
pub use transaction_service::TransactionService;
