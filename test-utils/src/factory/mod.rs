//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let driver = factory::driver::DriverFactory::new(&db)
//!     .approved()
//!     .commission_rate_bp(2000)
//!     .build()
//!     .await?;
//! let (user, order) = factory::helpers::create_order_with_user(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Passenger accounts
//! - `driver` - Driver accounts
//! - `admin` - Admin accounts
//! - `order` - Transfer orders
//! - `rideshare` - Shared rides
//! - `rideshare_booking` - Seat bookings on a rideshare
//! - `helpers` - ID generation and creation with dependencies

pub mod admin;
pub mod driver;
pub mod helpers;
pub mod order;
pub mod rideshare;
pub mod rideshare_booking;
pub mod user;

pub use admin::create_admin;
pub use driver::create_driver;
pub use order::create_order;
pub use rideshare::create_rideshare;
pub use rideshare_booking::create_booking;
pub use user::create_user;
