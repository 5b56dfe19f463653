//! Balance ledger domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::balance::{BalanceDto, TransactionDto, TransactionKind},
    server::{model::account::AccountRef, util::money::from_minor},
};

/// Status written on every ledger row; the ledger only records settled movements.
pub const TRANSACTION_STATUS_COMPLETED: &str = "completed";

/// One immutable ledger row.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceTransaction {
    pub id: i32,
    pub account: AccountRef,
    pub order_id: Option<i32>,
    /// Signed amount in minor units, negative for debits.
    pub amount: i64,
    pub kind: TransactionKind,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl BalanceTransaction {
    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            amount: from_minor(self.amount),
            kind: self.kind,
            description: self.description,
            status: self.status,
            order_id: self.order_id,
            created_at: self.created_at,
        }
    }

    /// Converts a stored row, rejecting rows without an owning account or with an
    /// unknown kind.
    pub fn from_entity(entity: entity::balance_transaction::Model) -> Result<Self, DbErr> {
        let account = AccountRef::from_columns(entity.user_id, entity.driver_id).ok_or_else(
            || DbErr::Custom(format!("balance transaction {} has no account", entity.id)),
        )?;
        let kind = TransactionKind::parse(&entity.kind).ok_or_else(|| {
            DbErr::Custom(format!(
                "balance transaction {} has unknown kind '{}'",
                entity.id, entity.kind
            ))
        })?;

        Ok(Self {
            id: entity.id,
            account,
            order_id: entity.order_id,
            amount: entity.amount,
            kind,
            description: entity.description,
            status: entity.status,
            created_at: entity.created_at,
        })
    }
}

/// Debit or credit request. `amount` is the positive magnitude in minor units.
#[derive(Debug, Clone)]
pub struct LedgerEntryParam {
    pub account: AccountRef,
    pub amount: i64,
    pub kind: TransactionKind,
    pub description: String,
    pub order_id: Option<i32>,
}

/// Row to append to the ledger. `amount` is already signed.
#[derive(Debug, Clone)]
pub struct NewTransactionParam {
    pub account: AccountRef,
    pub amount: i64,
    pub kind: TransactionKind,
    pub description: String,
    pub order_id: Option<i32>,
}

/// Current balance together with the newest transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountStatement {
    pub balance: i64,
    pub transactions: Vec<BalanceTransaction>,
}

impl AccountStatement {
    pub fn into_dto(self) -> BalanceDto {
        BalanceDto {
            balance: from_minor(self.balance),
            transactions: self
                .transactions
                .into_iter()
                .map(BalanceTransaction::into_dto)
                .collect(),
        }
    }
}
