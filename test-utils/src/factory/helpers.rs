//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used by every factory and convenience methods for creating
//! entities together with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to build unique phone numbers, emails and tokens across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and an order placed by that user.
///
/// Both rows use default values. Requires the order tables with seeded statuses.
///
/// # Returns
/// - `Ok((user, order))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::order::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let order = crate::factory::order::create_order(db, user.id).await?;

    Ok((user, order))
}

/// Creates a rideshare with `seats_total` seats and a confirmed booking taking
/// `seats_count` of them.
///
/// The rideshare's `seats_available` is reduced accordingly so the seat invariant holds.
///
/// # Returns
/// - `Ok((rideshare, booking))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_rideshare_with_booking(
    db: &DatabaseConnection,
    seats_total: i32,
    seats_count: i32,
) -> Result<(entity::rideshare::Model, entity::rideshare_booking::Model), DbErr> {
    let rideshare = crate::factory::rideshare::RideshareFactory::new(db)
        .seats_total(seats_total)
        .seats_available(seats_total - seats_count)
        .build()
        .await?;
    let booking = crate::factory::rideshare_booking::RideshareBookingFactory::new(db, rideshare.id)
        .seats_count(seats_count)
        .build()
        .await?;

    Ok((rideshare, booking))
}
