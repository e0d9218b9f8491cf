//! Ledger API Library
//!
//! Re-exports modules for integration testing and the server binary.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
mod error;
pub mod service;
pub mod store;

pub use config::Config;
pub use domain::{Account, DomainError, EntryType, OperationContext, Transaction};
pub use error::{AppError, AppResult, ErrorBody, ErrorResponse, INTERNAL_SERVER_MESSAGE};
