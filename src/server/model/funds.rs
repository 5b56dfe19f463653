//! Withdrawal and deposit request models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::balance::{
        CreateDepositDto, CreateWithdrawalDto, DirectCreditDto, FundsRequestDto, RequestStatus,
        ReviewRequestDto,
    },
    server::{
        error::AppError,
        model::account::AccountRef,
        util::{
            money::{from_minor, to_minor},
            validate::{optional_text, required_text},
        },
    },
};

/// Payment method recorded when a deposit request names none.
const DEFAULT_PAYMENT_METHOD: &str = "card";

/// Which table a funds request lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundsRequestKind {
    Withdrawal,
    Deposit,
}

/// Withdrawal or deposit request awaiting or past admin review.
#[derive(Debug, Clone, PartialEq)]
pub struct FundsRequest {
    pub id: i32,
    pub kind: FundsRequestKind,
    pub account: AccountRef,
    pub amount: i64,
    /// Requisites for withdrawals, payment method for deposits.
    pub details: String,
    pub status: RequestStatus,
    pub admin_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FundsRequest {
    pub fn into_dto(self) -> FundsRequestDto {
        FundsRequestDto {
            id: self.id,
            account_kind: self.account.kind(),
            account_id: self.account.id(),
            amount: from_minor(self.amount),
            details: self.details,
            status: self.status,
            admin_note: self.admin_note,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_withdrawal(entity: entity::withdrawal_request::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            kind: FundsRequestKind::Withdrawal,
            account: owner(entity.id, entity.user_id, entity.driver_id)?,
            amount: entity.amount,
            details: entity.requisites,
            status: status(entity.id, &entity.status)?,
            admin_note: entity.admin_note,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn from_deposit(entity: entity::deposit_request::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            kind: FundsRequestKind::Deposit,
            account: owner(entity.id, entity.user_id, entity.driver_id)?,
            amount: entity.amount,
            details: entity.payment_method,
            status: status(entity.id, &entity.status)?,
            admin_note: entity.admin_note,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

fn owner(id: i32, user_id: Option<i32>, driver_id: Option<i32>) -> Result<AccountRef, DbErr> {
    AccountRef::from_columns(user_id, driver_id)
        .ok_or_else(|| DbErr::Custom(format!("funds request {} has no account", id)))
}

fn status(id: i32, value: &str) -> Result<RequestStatus, DbErr> {
    RequestStatus::parse(value).ok_or_else(|| {
        DbErr::Custom(format!("funds request {} has unknown status '{}'", id, value))
    })
}

#[derive(Debug, Clone)]
pub struct CreateFundsRequestParam {
    pub account: AccountRef,
    /// Minor units, > 0.
    pub amount: i64,
    pub details: String,
}

impl CreateFundsRequestParam {
    pub fn withdrawal(account: AccountRef, dto: CreateWithdrawalDto) -> Result<Self, AppError> {
        Ok(Self {
            account,
            amount: to_minor("amount", dto.amount)?,
            details: required_text("requisites", Some(dto.requisites))?,
        })
    }

    pub fn deposit(account: AccountRef, dto: CreateDepositDto) -> Result<Self, AppError> {
        Ok(Self {
            account,
            amount: to_minor("amount", dto.amount)?,
            details: optional_text(Some(dto.payment_method))
                .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
        })
    }
}

/// Admin decision on a pending request.
#[derive(Debug, Clone)]
pub struct ReviewRequestParam {
    pub request_id: i32,
    pub admin_note: Option<String>,
}

impl ReviewRequestParam {
    pub fn from_dto(request_id: i32, dto: ReviewRequestDto) -> Self {
        Self {
            request_id,
            admin_note: optional_text(dto.admin_note),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectCreditParam {
    pub account: AccountRef,
    pub amount: i64,
    pub note: Option<String>,
}

impl DirectCreditParam {
    pub fn from_dto(dto: DirectCreditDto) -> Result<Self, AppError> {
        Ok(Self {
            account: AccountRef::from_parts(dto.account_kind, dto.account_id),
            amount: to_minor("amount", dto.amount)?,
            note: optional_text(dto.note),
        })
    }
}
