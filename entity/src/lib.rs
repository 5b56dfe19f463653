//! SeaORM entity definitions for the transfer marketplace schema.

pub mod prelude;

pub mod admin;
pub mod balance_transaction;
pub mod deposit_request;
pub mod driver;
pub mod order;
pub mod order_status;
pub mod push_subscription;
pub mod rideshare;
pub mod rideshare_booking;
pub mod user;
pub mod withdrawal_request;
