//! Transaction Service
//!
//! Account and transaction lifecycle. The only business rule lives in
//! [`TransactionService::create_transaction`]: the operation type must exist
//! and decides the sign of the stored amount.

use std::sync::Arc;

use crate::domain::{
    normalize_amount, Account, DomainError, NewAccount, NewTransaction, OperationContext,
    Transaction, TransactionStatus,
};
use crate::error::AppResult;
use crate::store::{AccountStore, MemoryStore, OperationTypeStore, TransactionStore};

use super::{CreateAccountCommand, CreateTransactionCommand};

/// Orchestrates account and transaction operations over the store contracts
#[derive(Clone)]
pub struct TransactionService {
    accounts: Arc<dyn AccountStore>,
    transactions: Arc<dyn TransactionStore>,
    operation_types: Arc<dyn OperationTypeStore>,
}

impl TransactionService {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        transactions: Arc<dyn TransactionStore>,
        operation_types: Arc<dyn OperationTypeStore>,
    ) -> Self {
        Self {
            accounts,
            transactions,
            operation_types,
        }
    }

    /// Service backed by a single in-memory store
    pub fn in_memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store.clone(), store)
    }

    /// Create a customer account
    pub async fn create_account(
        &self,
        command: CreateAccountCommand,
        context: &OperationContext,
    ) -> AppResult<Account> {
        let account = self
            .accounts
            .insert(NewAccount::new(command.document_number))
            .await?;

        tracing::debug!(
            account_id = account.id,
            correlation_id = ?context.correlation_id,
            "Account created"
        );

        Ok(account)
    }

    /// Fetch an account; `None` when no such account exists
    pub async fn get_account_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        Ok(self.accounts.find_by_id(id).await?)
    }

    /// Record a transaction with the amount signed by its operation type.
    ///
    /// The account is not checked here; an unknown account is rejected by the
    /// store's foreign key.
    pub async fn create_transaction(
        &self,
        command: CreateTransactionCommand,
        context: &OperationContext,
    ) -> AppResult<Transaction> {
        let operation = self
            .operation_types
            .find_by_id(command.operation_type_id)
            .await?
            .ok_or(DomainError::OperationTypeNotFound(command.operation_type_id))?;

        let amount = normalize_amount(command.amount, operation.entry_type);

        tracing::debug!(
            amount = %amount,
            entry_type = %operation.entry_type,
            correlation_id = ?context.correlation_id,
            "Creating transaction"
        );

        let transaction = self
            .transactions
            .insert(NewTransaction {
                account_id: command.account_id,
                operation_type_id: command.operation_type_id,
                amount,
                status: TransactionStatus::Completed,
            })
            .await?;

        Ok(transaction)
    }

    /// All transactions in store order
    pub async fn get_transactions(&self) -> AppResult<Vec<Transaction>> {
        Ok(self.transactions.get_all().await?)
    }
}
