use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::account::AccountRef};

/// Balance ledger rule violations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Debit or credit amount is zero or negative.
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    /// Balance does not cover the requested debit.
    #[error("Insufficient funds on balance")]
    InsufficientFunds,

    /// The referenced user or driver account does not exist.
    #[error("Account {0} not found")]
    AccountNotFound(AccountRef),
}

/// - `InvalidAmount` → 400 Bad Request
/// - `InsufficientFunds` → 409 Conflict
/// - `AccountNotFound` → 404 Not Found
impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidAmount => StatusCode::BAD_REQUEST,
            Self::InsufficientFunds => StatusCode::CONFLICT,
            Self::AccountNotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
