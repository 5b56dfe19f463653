//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Money is carried as `i64` minor units everywhere below the controller layer.

pub mod account;
pub mod funds;
pub mod ledger;
pub mod order;
pub mod push;
pub mod rideshare;
pub mod status;
