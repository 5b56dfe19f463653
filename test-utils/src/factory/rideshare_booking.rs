//! Booking factory for creating test rideshare bookings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings.
///
/// Does not touch the rideshare's seat counter; adjust it on the rideshare factory when
/// the test depends on the seat invariant.
pub struct RideshareBookingFactory<'a> {
    db: &'a DatabaseConnection,
    rideshare_id: i32,
    seats_count: i32,
    status: String,
    cancel_token: String,
}

impl<'a> RideshareBookingFactory<'a> {
    /// Creates a new factory for a confirmed 1-seat booking with a unique token.
    pub fn new(db: &'a DatabaseConnection, rideshare_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            rideshare_id,
            seats_count: 1,
            status: "confirmed".to_string(),
            cancel_token: format!("token{:027}", id),
        }
    }

    pub fn seats_count(mut self, seats_count: i32) -> Self {
        self.seats_count = seats_count;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn cancel_token(mut self, cancel_token: impl Into<String>) -> Self {
        self.cancel_token = cancel_token.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::rideshare_booking::Model, DbErr> {
        entity::rideshare_booking::ActiveModel {
            rideshare_id: ActiveValue::Set(self.rideshare_id),
            passenger_name: ActiveValue::Set("Passenger".to_string()),
            passenger_phone: ActiveValue::Set("+79995554433".to_string()),
            passenger_email: ActiveValue::Set(None),
            seats_count: ActiveValue::Set(self.seats_count),
            status: ActiveValue::Set(self.status),
            cancel_token: ActiveValue::Set(self.cancel_token),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed 1-seat booking on `rideshare_id`.
pub async fn create_booking(
    db: &DatabaseConnection,
    rideshare_id: i32,
) -> Result<entity::rideshare_booking::Model, DbErr> {
    RideshareBookingFactory::new(db, rideshare_id).build().await
}
