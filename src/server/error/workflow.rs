use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// State conflicts raised by the order, rideshare and funds request workflows.
///
/// Every variant except the `*NotFound` ones means a conditional update matched no
/// row because another request changed the state first.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Order is already taken, cancelled or completed.
    #[error("Order {0} is no longer available")]
    OrderUnavailable(i32),

    #[error("Order {0} not found")]
    OrderNotFound(i32),

    /// Rideshare has fewer free seats than requested.
    #[error("Only {available} seats left, {requested} requested")]
    InsufficientSeats {
        /// Seats asked for.
        requested: i32,
        /// Seats free at the time of the check.
        available: i32,
    },

    /// Rideshare does not exist or is not active.
    #[error("Rideshare {0} not found")]
    RideshareNotFound(i32),

    /// No confirmed booking carries the given cancel token.
    #[error("Booking not found or already cancelled")]
    BookingNotFound,

    /// Withdrawal or deposit request was already reviewed.
    #[error("Request {0} is not pending")]
    RequestNotPending(i32),
}

/// - `*NotFound` → 404 Not Found
/// - `OrderUnavailable` / `InsufficientSeats` / `RequestNotPending` → 409 Conflict
impl IntoResponse for WorkflowError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::OrderNotFound(_) | Self::RideshareNotFound(_) | Self::BookingNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::OrderUnavailable(_)
            | Self::InsufficientSeats { .. }
            | Self::RequestNotPending(_) => StatusCode::CONFLICT,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
