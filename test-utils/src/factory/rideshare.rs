//! Rideshare factory for creating test shared rides.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rideshares.
///
/// `seats_available` follows `seats_total` unless set explicitly.
pub struct RideshareFactory<'a> {
    db: &'a DatabaseConnection,
    seats_total: i32,
    seats_available: Option<i32>,
    price_per_seat: i64,
    status: String,
    departure_at: DateTime<Utc>,
}

impl<'a> RideshareFactory<'a> {
    /// Creates a new RideshareFactory with default values.
    ///
    /// Defaults:
    /// - seats_total: `4`, seats_available: same as total
    /// - price_per_seat: `150000` minor units
    /// - status: `"active"`
    /// - departure: two days from now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            seats_total: 4,
            seats_available: None,
            price_per_seat: 150_000,
            status: "active".to_string(),
            departure_at: Utc::now() + Duration::days(2),
        }
    }

    pub fn seats_total(mut self, seats_total: i32) -> Self {
        self.seats_total = seats_total;
        self
    }

    pub fn seats_available(mut self, seats_available: i32) -> Self {
        self.seats_available = Some(seats_available);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn departure_at(mut self, departure_at: DateTime<Utc>) -> Self {
        self.departure_at = departure_at;
        self
    }

    /// Builds and inserts the rideshare entity into the database.
    pub async fn build(self) -> Result<entity::rideshare::Model, DbErr> {
        entity::rideshare::ActiveModel {
            route_from: ActiveValue::Set("Moscow".to_string()),
            route_to: ActiveValue::Set("Tver".to_string()),
            departure_at: ActiveValue::Set(self.departure_at),
            seats_total: ActiveValue::Set(self.seats_total),
            seats_available: ActiveValue::Set(self.seats_available.unwrap_or(self.seats_total)),
            price_per_seat: ActiveValue::Set(self.price_per_seat),
            car_class: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_by_name: ActiveValue::Set("Organizer".to_string()),
            created_by_phone: ActiveValue::Set("+79991112233".to_string()),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active 4-seat rideshare departing in two days.
pub async fn create_rideshare(db: &DatabaseConnection) -> Result<entity::rideshare::Model, DbErr> {
    RideshareFactory::new(db).build().await
}
