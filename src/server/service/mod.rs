//! Business logic layer.
//!
//! Services orchestrate repositories inside database transactions and hand events to
//! the notification fan-out after commit. Controllers build a service per request from
//! the shared `AppState`.

pub mod account;
pub mod auth;
pub mod funds;
pub mod ledger;
pub mod notification;
pub mod order;
pub mod payment;
pub mod push;
pub mod rideshare;
pub mod status;
