//! Withdrawal and deposit request repository.
//!
//! Both request kinds share a lifecycle (pending → completed | rejected) and live in
//! two tables with the same shape; `FundsRequestKind` selects the table.

use crate::{
    model::balance::RequestStatus,
    server::model::{
        account::AccountRef,
        funds::{CreateFundsRequestParam, FundsRequest, FundsRequestKind},
    },
};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct FundsRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FundsRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending request.
    ///
    /// # Arguments
    /// - `kind` - Withdrawal or deposit
    /// - `param` - Owner, positive amount and requisites/payment method
    pub async fn create(
        &self,
        kind: FundsRequestKind,
        param: CreateFundsRequestParam,
    ) -> Result<FundsRequest, DbErr> {
        let (user_id, driver_id) = param.account.columns();
        let now = Utc::now();
        let status = RequestStatus::Pending.as_str().to_string();

        match kind {
            FundsRequestKind::Withdrawal => {
                let entity = entity::prelude::WithdrawalRequest::insert(
                    entity::withdrawal_request::ActiveModel {
                        user_id: ActiveValue::Set(user_id),
                        driver_id: ActiveValue::Set(driver_id),
                        amount: ActiveValue::Set(param.amount),
                        requisites: ActiveValue::Set(param.details),
                        status: ActiveValue::Set(status),
                        admin_note: ActiveValue::Set(None),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                        ..Default::default()
                    },
                )
                .exec_with_returning(self.db)
                .await?;

                FundsRequest::from_withdrawal(entity)
            }
            FundsRequestKind::Deposit => {
                let entity =
                    entity::prelude::DepositRequest::insert(entity::deposit_request::ActiveModel {
                        user_id: ActiveValue::Set(user_id),
                        driver_id: ActiveValue::Set(driver_id),
                        amount: ActiveValue::Set(param.amount),
                        payment_method: ActiveValue::Set(param.details),
                        status: ActiveValue::Set(status),
                        admin_note: ActiveValue::Set(None),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                        ..Default::default()
                    })
                    .exec_with_returning(self.db)
                    .await?;

                FundsRequest::from_deposit(entity)
            }
        }
    }

    pub async fn find_by_id(
        &self,
        kind: FundsRequestKind,
        request_id: i32,
    ) -> Result<Option<FundsRequest>, DbErr> {
        match kind {
            FundsRequestKind::Withdrawal => entity::prelude::WithdrawalRequest::find_by_id(request_id)
                .one(self.db)
                .await?
                .map(FundsRequest::from_withdrawal)
                .transpose(),
            FundsRequestKind::Deposit => entity::prelude::DepositRequest::find_by_id(request_id)
                .one(self.db)
                .await?
                .map(FundsRequest::from_deposit)
                .transpose(),
        }
    }

    /// Moves a pending request to `status`, recording the admin note.
    ///
    /// # Returns
    /// - `Ok(true)` - Request transitioned by this call
    /// - `Ok(false)` - Request missing or no longer pending
    /// - `Err(DbErr)` - Database error during update
    pub async fn resolve(
        &self,
        kind: FundsRequestKind,
        request_id: i32,
        status: RequestStatus,
        admin_note: Option<String>,
    ) -> Result<bool, DbErr> {
        let pending = RequestStatus::Pending.as_str();
        let now = Utc::now();

        let rows_affected = match kind {
            FundsRequestKind::Withdrawal => {
                entity::prelude::WithdrawalRequest::update_many()
                    .col_expr(
                        entity::withdrawal_request::Column::Status,
                        Expr::value(status.as_str()),
                    )
                    .col_expr(
                        entity::withdrawal_request::Column::AdminNote,
                        Expr::value(admin_note),
                    )
                    .col_expr(
                        entity::withdrawal_request::Column::UpdatedAt,
                        Expr::value(now),
                    )
                    .filter(entity::withdrawal_request::Column::Id.eq(request_id))
                    .filter(entity::withdrawal_request::Column::Status.eq(pending))
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
            FundsRequestKind::Deposit => {
                entity::prelude::DepositRequest::update_many()
                    .col_expr(
                        entity::deposit_request::Column::Status,
                        Expr::value(status.as_str()),
                    )
                    .col_expr(
                        entity::deposit_request::Column::AdminNote,
                        Expr::value(admin_note),
                    )
                    .col_expr(entity::deposit_request::Column::UpdatedAt, Expr::value(now))
                    .filter(entity::deposit_request::Column::Id.eq(request_id))
                    .filter(entity::deposit_request::Column::Status.eq(pending))
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
        };

        Ok(rows_affected == 1)
    }

    /// Gets every request of one kind, newest first.
    pub async fn get_all(&self, kind: FundsRequestKind) -> Result<Vec<FundsRequest>, DbErr> {
        match kind {
            FundsRequestKind::Withdrawal => entity::prelude::WithdrawalRequest::find()
                .order_by_desc(entity::withdrawal_request::Column::CreatedAt)
                .order_by_desc(entity::withdrawal_request::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(FundsRequest::from_withdrawal)
                .collect(),
            FundsRequestKind::Deposit => entity::prelude::DepositRequest::find()
                .order_by_desc(entity::deposit_request::Column::CreatedAt)
                .order_by_desc(entity::deposit_request::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(FundsRequest::from_deposit)
                .collect(),
        }
    }

    /// Gets one account's requests of one kind, newest first.
    pub async fn get_by_account(
        &self,
        kind: FundsRequestKind,
        account: AccountRef,
    ) -> Result<Vec<FundsRequest>, DbErr> {
        match kind {
            FundsRequestKind::Withdrawal => {
                let query = entity::prelude::WithdrawalRequest::find();
                let query = match account {
                    AccountRef::User(id) => {
                        query.filter(entity::withdrawal_request::Column::UserId.eq(id))
                    }
                    AccountRef::Driver(id) => {
                        query.filter(entity::withdrawal_request::Column::DriverId.eq(id))
                    }
                };

                query
                    .order_by_desc(entity::withdrawal_request::Column::CreatedAt)
                    .order_by_desc(entity::withdrawal_request::Column::Id)
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(FundsRequest::from_withdrawal)
                    .collect()
            }
            FundsRequestKind::Deposit => {
                let query = entity::prelude::DepositRequest::find();
                let query = match account {
                    AccountRef::User(id) => {
                        query.filter(entity::deposit_request::Column::UserId.eq(id))
                    }
                    AccountRef::Driver(id) => {
                        query.filter(entity::deposit_request::Column::DriverId.eq(id))
                    }
                };

                query
                    .order_by_desc(entity::deposit_request::Column::CreatedAt)
                    .order_by_desc(entity::deposit_request::Column::Id)
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(FundsRequest::from_deposit)
                    .collect()
            }
        }
    }
}
