//! Postgres stores
//!
//! Referential integrity, id assignment and timestamps are enforced by the
//! schema in `migrations/`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::{
    Account, NewAccount, NewTransaction, OperationType, Transaction,
};

use super::{AccountStore, OperationTypeStore, StoreResult, TransactionStore};

type AccountRow = (i64, String, DateTime<Utc>, DateTime<Utc>);
type OperationTypeRow = (i64, String, String, DateTime<Utc>, DateTime<Utc>);
type TransactionRow = (i64, i64, i64, Decimal, String, DateTime<Utc>, DateTime<Utc>);

fn account_from_row(row: AccountRow) -> Account {
    let (id, document_number, created_at, updated_at) = row;
    Account {
        id,
        document_number,
        created_at,
        updated_at,
    }
}

fn operation_type_from_row(row: OperationTypeRow) -> StoreResult<OperationType> {
    let (id, description, entry_type, created_at, updated_at) = row;
    Ok(OperationType {
        id,
        description,
        entry_type: entry_type.parse()?,
        created_at,
        updated_at,
    })
}

fn transaction_from_row(row: TransactionRow) -> StoreResult<Transaction> {
    let (id, account_id, operation_type_id, amount, status, event_date, updated_at) = row;
    Ok(Transaction {
        id,
        account_id,
        operation_type_id,
        amount,
        status: status.parse()?,
        event_date,
        updated_at,
    })
}

// =========================================================================
// Accounts
// =========================================================================

/// Account store backed by the `accounts` table
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn insert(&self, account: NewAccount) -> StoreResult<Account> {
        let row: AccountRow = sqlx::query_as(
            r#"
            INSERT INTO accounts (document_number, created_at, updated_at)
            VALUES ($1, NOW(), NOW())
            RETURNING id, document_number, created_at, updated_at
            "#,
        )
        .bind(&account.document_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(account_from_row(row))
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Account>> {
        let row: Option<AccountRow> = sqlx::query_as(
            "SELECT id, document_number, created_at, updated_at FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(account_from_row))
    }

    async fn get_all(&self) -> StoreResult<Vec<Account>> {
        let rows: Vec<AccountRow> = sqlx::query_as(
            "SELECT id, document_number, created_at, updated_at FROM accounts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(account_from_row).collect())
    }
}

// =========================================================================
// Operation types
// =========================================================================

/// Operation type store backed by the seeded `operation_types` table
#[derive(Debug, Clone)]
pub struct PgOperationTypeStore {
    pool: PgPool,
}

impl PgOperationTypeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OperationTypeStore for PgOperationTypeStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<OperationType>> {
        let row: Option<OperationTypeRow> = sqlx::query_as(
            r#"
            SELECT id, description, entry_type, created_at, updated_at
            FROM operation_types
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(operation_type_from_row).transpose()
    }
}

// =========================================================================
// Transactions
// =========================================================================

/// Transaction store backed by the `transactions` table
#[derive(Debug, Clone)]
pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn insert(&self, transaction: NewTransaction) -> StoreResult<Transaction> {
        let row: TransactionRow = sqlx::query_as(
            r#"
            INSERT INTO transactions (account_id, operation_type_id, amount, status, event_date, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, account_id, operation_type_id, amount, status, event_date, updated_at
            "#,
        )
        .bind(transaction.account_id)
        .bind(transaction.operation_type_id)
        .bind(transaction.amount)
        .bind(transaction.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        transaction_from_row(row)
    }

    async fn get_all(&self) -> StoreResult<Vec<Transaction>> {
        let rows: Vec<TransactionRow> = sqlx::query_as(
            r#"
            SELECT id, account_id, operation_type_id, amount, status, event_date, updated_at
            FROM transactions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(transaction_from_row).collect()
    }
}
