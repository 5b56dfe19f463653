use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No account is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No account in session")]
    NotLoggedIn,

    /// Session references an account that no longer exists.
    ///
    /// The session is stale. Results in a 401 Unauthorized response.
    #[error("Account {0} from session not found in database")]
    AccountNotInDatabase(String),

    /// Account is logged in but lacks the role required by the endpoint.
    ///
    /// The message is logged for diagnostics. Results in a 403 Forbidden response.
    #[error("Access denied for {0}: {1}")]
    AccessDenied(String, String),

    /// Phone/email and password pair did not match a stored account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account exists but has been deactivated or not yet approved.
    #[error("Account is disabled")]
    AccountDisabled,

    /// Registration attempted with a phone number that already has an account.
    #[error("Phone number already registered")]
    PhoneAlreadyRegistered,
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotLoggedIn` / `AccountNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` / `AccountDisabled` → 403 Forbidden
/// - `PhoneAlreadyRegistered` → 409 Conflict
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::NotLoggedIn | Self::AccountNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::AccountDisabled => (StatusCode::FORBIDDEN, "Account is disabled"),
            Self::PhoneAlreadyRegistered => {
                (StatusCode::CONFLICT, "Phone number already registered")
            }
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
