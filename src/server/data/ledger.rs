//! Balance ledger repository.
//!
//! Owns every write to the `balance` columns of users and drivers and the append-only
//! `balance_transaction` table. Balance changes are single conditional `UPDATE`
//! statements so the database serializes concurrent debits; callers run them on the
//! same transaction as the ledger row they append.

use crate::{
    model::balance::TransactionKind,
    server::model::{
        account::AccountRef,
        ledger::{BalanceTransaction, NewTransactionParam, TRANSACTION_STATUS_COMPLETED},
    },
};
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct LedgerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LedgerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Subtracts `amount` from the account balance if the balance covers it.
    ///
    /// Runs `UPDATE … SET balance = balance - amount WHERE id = ? AND balance >= amount`.
    ///
    /// # Arguments
    /// - `account` - Account to debit
    /// - `amount` - Positive amount in minor units
    ///
    /// # Returns
    /// - `Ok(true)` - Balance was debited
    /// - `Ok(false)` - Account missing or balance too low; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn debit_balance(&self, account: AccountRef, amount: i64) -> Result<bool, DbErr> {
        let rows_affected = match account {
            AccountRef::User(id) => {
                entity::prelude::User::update_many()
                    .col_expr(
                        entity::user::Column::Balance,
                        Expr::col(entity::user::Column::Balance).sub(amount),
                    )
                    .filter(entity::user::Column::Id.eq(id))
                    .filter(entity::user::Column::Balance.gte(amount))
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
            AccountRef::Driver(id) => {
                entity::prelude::Driver::update_many()
                    .col_expr(
                        entity::driver::Column::Balance,
                        Expr::col(entity::driver::Column::Balance).sub(amount),
                    )
                    .filter(entity::driver::Column::Id.eq(id))
                    .filter(entity::driver::Column::Balance.gte(amount))
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
        };

        Ok(rows_affected == 1)
    }

    /// Adds `amount` to the account balance.
    ///
    /// # Returns
    /// - `Ok(true)` - Balance was credited
    /// - `Ok(false)` - Account does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn credit_balance(&self, account: AccountRef, amount: i64) -> Result<bool, DbErr> {
        let rows_affected = match account {
            AccountRef::User(id) => {
                entity::prelude::User::update_many()
                    .col_expr(
                        entity::user::Column::Balance,
                        Expr::col(entity::user::Column::Balance).add(amount),
                    )
                    .filter(entity::user::Column::Id.eq(id))
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
            AccountRef::Driver(id) => {
                entity::prelude::Driver::update_many()
                    .col_expr(
                        entity::driver::Column::Balance,
                        Expr::col(entity::driver::Column::Balance).add(amount),
                    )
                    .filter(entity::driver::Column::Id.eq(id))
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
        };

        Ok(rows_affected == 1)
    }

    /// Reads the current balance.
    ///
    /// # Returns
    /// - `Ok(Some(balance))` - Balance in minor units
    /// - `Ok(None)` - Account does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_balance(&self, account: AccountRef) -> Result<Option<i64>, DbErr> {
        let balance = match account {
            AccountRef::User(id) => entity::prelude::User::find_by_id(id)
                .one(self.db)
                .await?
                .map(|user| user.balance),
            AccountRef::Driver(id) => entity::prelude::Driver::find_by_id(id)
                .one(self.db)
                .await?
                .map(|driver| driver.balance),
        };

        Ok(balance)
    }

    /// Appends a completed ledger row.
    pub async fn insert_transaction(
        &self,
        param: NewTransactionParam,
    ) -> Result<BalanceTransaction, DbErr> {
        let (user_id, driver_id) = param.account.columns();

        let entity =
            entity::prelude::BalanceTransaction::insert(entity::balance_transaction::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                driver_id: ActiveValue::Set(driver_id),
                order_id: ActiveValue::Set(param.order_id),
                amount: ActiveValue::Set(param.amount),
                kind: ActiveValue::Set(param.kind.as_str().to_string()),
                description: ActiveValue::Set(param.description),
                status: ActiveValue::Set(TRANSACTION_STATUS_COMPLETED.to_string()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .exec_with_returning(self.db)
            .await?;

        BalanceTransaction::from_entity(entity)
    }

    /// Net of the payment and refund rows an account holds for one order.
    ///
    /// Payments are stored negative and refunds positive, so an order paid once and not
    /// yet refunded yields minus its debited amount.
    pub async fn order_net_amount(&self, account: AccountRef, order_id: i32) -> Result<i64, DbErr> {
        let query = entity::prelude::BalanceTransaction::find()
            .filter(entity::balance_transaction::Column::OrderId.eq(order_id))
            .filter(entity::balance_transaction::Column::Kind.is_in([
                TransactionKind::Payment.as_str(),
                TransactionKind::Refund.as_str(),
            ]));
        let query = match account {
            AccountRef::User(id) => {
                query.filter(entity::balance_transaction::Column::UserId.eq(id))
            }
            AccountRef::Driver(id) => {
                query.filter(entity::balance_transaction::Column::DriverId.eq(id))
            }
        };

        let rows = query.all(self.db).await?;

        Ok(rows.iter().map(|row| row.amount).sum())
    }

    /// Lists an account's transactions, newest first.
    ///
    /// # Arguments
    /// - `account` - Account whose rows to return
    /// - `limit` - Maximum number of rows
    pub async fn list_transactions(
        &self,
        account: AccountRef,
        limit: u64,
    ) -> Result<Vec<BalanceTransaction>, DbErr> {
        let query = entity::prelude::BalanceTransaction::find();
        let query = match account {
            AccountRef::User(id) => {
                query.filter(entity::balance_transaction::Column::UserId.eq(id))
            }
            AccountRef::Driver(id) => {
                query.filter(entity::balance_transaction::Column::DriverId.eq(id))
            }
        };

        let entities = query
            .order_by_desc(entity::balance_transaction::Column::CreatedAt)
            .order_by_desc(entity::balance_transaction::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(BalanceTransaction::from_entity)
            .collect()
    }
}
