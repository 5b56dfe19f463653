//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait`, so services can run several
//! repositories on one `DatabaseTransaction`.

pub mod admin;
pub mod driver;
pub mod funds_request;
pub mod ledger;
pub mod order;
pub mod order_status;
pub mod push_subscription;
pub mod rideshare;
pub mod rideshare_booking;
pub mod user;

#[cfg(test)]
mod test;
