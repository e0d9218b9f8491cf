//! Store module
//!
//! Persistence contracts used by the transaction service, with a Postgres
//! backend and an in-memory backend selected at wiring time.

mod error;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Account, NewAccount, NewTransaction, OperationType, Transaction};

pub use error::{ConstraintKind, StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::{PgAccountStore, PgOperationTypeStore, PgTransactionStore};

/// Account persistence
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert an account; the store assigns the id and timestamps.
    async fn insert(&self, account: NewAccount) -> StoreResult<Account>;

    /// `Ok(None)` means no such row, distinct from a storage failure.
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Account>>;

    async fn get_all(&self) -> StoreResult<Vec<Account>>;
}

/// Operation type reference data (read-only)
#[async_trait]
pub trait OperationTypeStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<OperationType>>;
}

/// Transaction persistence
///
/// Implementations must reject transactions whose account or operation type
/// does not exist with a foreign key violation.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert(&self, transaction: NewTransaction) -> StoreResult<Transaction>;

    /// All transactions in insertion order
    async fn get_all(&self) -> StoreResult<Vec<Transaction>>;
}
