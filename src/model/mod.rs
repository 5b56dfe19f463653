//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON request and response bodies. Server-side domain models
//! convert into them at the controller boundary via `into_dto()`.

pub mod account;
pub mod api;
pub mod balance;
pub mod order;
pub mod push;
pub mod rideshare;
pub mod status;
