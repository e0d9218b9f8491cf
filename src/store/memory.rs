//! In-memory stores
//!
//! Mirrors the Postgres schema: auto-increment ids, store-assigned
//! timestamps, the `document_number` length limit and both foreign keys on
//! `transactions`. All three tables live behind one lock so the foreign key
//! check and the insert are atomic.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{
    Account, EntryType, NewAccount, NewTransaction, OperationType, Transaction,
};

use super::{
    AccountStore, ConstraintKind, OperationTypeStore, StoreError, StoreResult, TransactionStore,
};

/// Column limit of `accounts.document_number`
const DOCUMENT_NUMBER_MAX_LEN: usize = 255;

/// Operation types seeded by the initial migration
const SEED_OPERATION_TYPES: &[(&str, EntryType)] = &[
    ("Normal Purchase", EntryType::Debit),
    ("Purchase with installments", EntryType::Debit),
    ("Withdrawal", EntryType::Debit),
    ("Credit Voucher", EntryType::Credit),
];

/// Row that carries a store-assigned primary key
trait Record: Clone {
    fn id(&self) -> i64;
}

impl Record for Account {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for OperationType {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Transaction {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Append-only table with a serial primary key
#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T: Record> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a row with the next id and insert it
    fn insert_with(&mut self, build: impl FnOnce(i64, DateTime<Utc>) -> T) -> T {
        let row = build(self.next_id, Utc::now());
        self.next_id += 1;
        self.rows.push(row.clone());
        row
    }

    fn find(&self, id: i64) -> Option<T> {
        self.rows.iter().find(|row| row.id() == id).cloned()
    }

    fn contains(&self, id: i64) -> bool {
        self.rows.iter().any(|row| row.id() == id)
    }

    fn all(&self) -> Vec<T> {
        self.rows.clone()
    }
}

#[derive(Debug)]
struct Tables {
    accounts: Table<Account>,
    operation_types: Table<OperationType>,
    transactions: Table<Transaction>,
}

/// In-memory backend implementing every store trait
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create a store seeded with the standard operation types
    pub fn new() -> Self {
        let mut operation_types = Table::new();
        for (description, entry_type) in SEED_OPERATION_TYPES {
            operation_types.insert_with(|id, now| OperationType {
                id,
                description: description.to_string(),
                entry_type: *entry_type,
                created_at: now,
                updated_at: now,
            });
        }

        Self {
            tables: Arc::new(RwLock::new(Tables {
                accounts: Table::new(),
                operation_types,
                transactions: Table::new(),
            })),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn insert(&self, account: NewAccount) -> StoreResult<Account> {
        if account.document_number.chars().count() > DOCUMENT_NUMBER_MAX_LEN {
            return Err(StoreError::constraint(
                ConstraintKind::ValueTooLong,
                format!(
                    "value too long for type character varying({})",
                    DOCUMENT_NUMBER_MAX_LEN
                ),
            ));
        }

        let mut tables = self.tables.write().await;
        Ok(tables.accounts.insert_with(|id, now| Account {
            id,
            document_number: account.document_number,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Account>> {
        Ok(self.tables.read().await.accounts.find(id))
    }

    async fn get_all(&self) -> StoreResult<Vec<Account>> {
        Ok(self.tables.read().await.accounts.all())
    }
}

#[async_trait]
impl OperationTypeStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<OperationType>> {
        Ok(self.tables.read().await.operation_types.find(id))
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn insert(&self, transaction: NewTransaction) -> StoreResult<Transaction> {
        let mut tables = self.tables.write().await;

        if !tables.accounts.contains(transaction.account_id) {
            return Err(StoreError::constraint(
                ConstraintKind::ForeignKey,
                "insert or update on table \"transactions\" violates foreign key constraint \"transactions_account_id_fkey\"",
            ));
        }
        if !tables.operation_types.contains(transaction.operation_type_id) {
            return Err(StoreError::constraint(
                ConstraintKind::ForeignKey,
                "insert or update on table \"transactions\" violates foreign key constraint \"transactions_operation_type_id_fkey\"",
            ));
        }

        Ok(tables.transactions.insert_with(|id, now| Transaction {
            id,
            account_id: transaction.account_id,
            operation_type_id: transaction.operation_type_id,
            amount: transaction.amount,
            status: transaction.status,
            event_date: now,
            updated_at: now,
        }))
    }

    async fn get_all(&self) -> StoreResult<Vec<Transaction>> {
        Ok(self.tables.read().await.transactions.all())
    }
}
