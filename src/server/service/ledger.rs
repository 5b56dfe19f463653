//! Balance ledger operations.
//!
//! Every balance mutation goes through `debit` or `credit`, which pair one conditional
//! balance update with one appended transaction row on the same connection. Callers
//! that combine a ledger entry with other writes pass an open `DatabaseTransaction`.

use sea_orm::ConnectionTrait;

use crate::{
    model::balance::TransactionKind,
    server::{
        data::ledger::LedgerRepository,
        error::{ledger::LedgerError, AppError},
        model::{
            account::AccountRef,
            ledger::{AccountStatement, BalanceTransaction, LedgerEntryParam, NewTransactionParam},
        },
    },
};

/// Transactions returned by a statement when no limit is given.
pub const DEFAULT_TRANSACTION_LIMIT: u64 = 50;
/// Largest accepted statement limit.
pub const MAX_TRANSACTION_LIMIT: u64 = 200;

pub struct LedgerService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LedgerService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Removes `amount` from the account and records a negative transaction.
    ///
    /// # Arguments
    /// - `param` - Account, positive amount, kind, description and optional order
    ///
    /// # Returns
    /// - `Ok(BalanceTransaction)` - The appended ledger row
    /// - `Err(LedgerError::InvalidAmount)` - Amount is zero or negative
    /// - `Err(LedgerError::AccountNotFound)` - Account does not exist
    /// - `Err(LedgerError::InsufficientFunds)` - Balance below the amount
    pub async fn debit(&self, param: LedgerEntryParam) -> Result<BalanceTransaction, AppError> {
        if param.amount <= 0 {
            return Err(LedgerError::InvalidAmount.into());
        }

        let repo = LedgerRepository::new(self.db);
        if !repo.debit_balance(param.account, param.amount).await? {
            return Err(match repo.get_balance(param.account).await? {
                None => LedgerError::AccountNotFound(param.account),
                Some(_) => LedgerError::InsufficientFunds,
            }
            .into());
        }

        let transaction = repo
            .insert_transaction(NewTransactionParam {
                account: param.account,
                amount: -param.amount,
                kind: param.kind,
                description: param.description,
                order_id: param.order_id,
            })
            .await?;

        Ok(transaction)
    }

    /// Adds `amount` to the account and records a positive transaction.
    ///
    /// # Returns
    /// - `Ok(BalanceTransaction)` - The appended ledger row
    /// - `Err(LedgerError::InvalidAmount)` - Amount is zero or negative
    /// - `Err(LedgerError::AccountNotFound)` - Account does not exist
    pub async fn credit(&self, param: LedgerEntryParam) -> Result<BalanceTransaction, AppError> {
        if param.amount <= 0 {
            return Err(LedgerError::InvalidAmount.into());
        }

        let repo = LedgerRepository::new(self.db);
        if !repo.credit_balance(param.account, param.amount).await? {
            return Err(LedgerError::AccountNotFound(param.account).into());
        }

        let transaction = repo
            .insert_transaction(NewTransactionParam {
                account: param.account,
                amount: param.amount,
                kind: param.kind,
                description: param.description,
                order_id: param.order_id,
            })
            .await?;

        Ok(transaction)
    }

    pub async fn get_balance(&self, account: AccountRef) -> Result<i64, AppError> {
        LedgerRepository::new(self.db)
            .get_balance(account)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(account).into())
    }

    /// Amount still held from `account` for an order: payments minus refunds.
    pub async fn order_paid_amount(&self, account: AccountRef, order_id: i32) -> Result<i64, AppError> {
        let net = LedgerRepository::new(self.db)
            .order_net_amount(account, order_id)
            .await?;

        Ok(-net)
    }

    /// Lists transactions newest first; `limit` defaults to 50 and is capped at 200.
    pub async fn list_transactions(
        &self,
        account: AccountRef,
        limit: Option<u64>,
    ) -> Result<Vec<BalanceTransaction>, AppError> {
        let limit = limit
            .unwrap_or(DEFAULT_TRANSACTION_LIMIT)
            .clamp(1, MAX_TRANSACTION_LIMIT);

        Ok(LedgerRepository::new(self.db)
            .list_transactions(account, limit)
            .await?)
    }

    /// Balance with the newest transactions.
    pub async fn statement(
        &self,
        account: AccountRef,
        limit: Option<u64>,
    ) -> Result<AccountStatement, AppError> {
        let balance = self.get_balance(account).await?;
        let transactions = self.list_transactions(account, limit).await?;

        Ok(AccountStatement {
            balance,
            transactions,
        })
    }
}

/// Ledger entry for an order paid from balance.
pub fn order_payment(user_id: i32, order_id: i32, amount: i64) -> LedgerEntryParam {
    LedgerEntryParam {
        account: AccountRef::User(user_id),
        amount,
        kind: TransactionKind::Payment,
        description: format!("Payment for order #{}", order_id),
        order_id: Some(order_id),
    }
}

/// Ledger entry returning an order payment to the passenger.
pub fn order_refund(user_id: i32, order_id: i32, amount: i64) -> LedgerEntryParam {
    LedgerEntryParam {
        account: AccountRef::User(user_id),
        amount,
        kind: TransactionKind::Refund,
        description: format!("Refund for cancelled order #{}", order_id),
        order_id: Some(order_id),
    }
}
