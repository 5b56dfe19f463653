//! HTTP request handlers.
//!
//! Handlers check access with `AuthGuard`, convert DTOs into params, call a service
//! and convert the returned domain model back into a DTO. Every handler carries a
//! `utoipa::path` annotation so the router can assemble the OpenAPI document.

pub mod account;
pub mod auth;
pub mod balance;
pub mod funds;
pub mod order;
pub mod param;
pub mod push;
pub mod rideshare;
pub mod status;

use crate::server::{
    error::AppError,
    model::account::{Account, AccountRef},
};

/// Ledger account of a caller that passed the `BalanceHolder` permission.
pub(crate) fn ledger_account(account: &Account) -> Result<AccountRef, AppError> {
    account.account_ref().ok_or_else(|| {
        AppError::InternalError(format!(
            "{} passed the balance holder check without a balance",
            account.principal()
        ))
    })
}
