//! Order factory for creating test transfer orders.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// Orders are inserted directly without touching the ledger, so a factory order marked
/// `from_balance` does not debit its user.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db, user.id)
///     .price(150_000)
///     .status_id(2)
///     .driver_id(driver.id)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    driver_id: Option<i32>,
    status_id: i32,
    price: i64,
    payment_type: String,
    payment_from_balance: bool,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - driver_id: `None`
    /// - status_id: `1` (created)
    /// - price: `100000` minor units
    /// - payment_type: `"cash"`, payment_from_balance: `false`
    /// - pickup: one day from now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            driver_id: None,
            status_id: 1,
            price: 100_000,
            payment_type: "cash".to_string(),
            payment_from_balance: false,
            created_at: Utc::now(),
        }
    }

    pub fn driver_id(mut self, driver_id: i32) -> Self {
        self.driver_id = Some(driver_id);
        self
    }

    pub fn status_id(mut self, status_id: i32) -> Self {
        self.status_id = status_id;
        self
    }

    /// Sets the price in minor currency units.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn payment_type(mut self, payment_type: impl Into<String>) -> Self {
        self.payment_type = payment_type.into();
        self
    }

    pub fn from_balance(mut self, payment_from_balance: bool) -> Self {
        self.payment_from_balance = payment_from_balance;
        self
    }

    /// Overrides the creation timestamp, for ordering tests.
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            driver_id: ActiveValue::Set(self.driver_id),
            status_id: ActiveValue::Set(self.status_id),
            from_location: ActiveValue::Set("Sheremetyevo Airport".to_string()),
            to_location: ActiveValue::Set("Moscow City".to_string()),
            pickup_at: ActiveValue::Set(Utc::now() + Duration::days(1)),
            flight_number: ActiveValue::Set(None),
            passenger_name: ActiveValue::Set("Passenger".to_string()),
            passenger_phone: ActiveValue::Set("+79990000000".to_string()),
            passenger_email: ActiveValue::Set(None),
            passengers_count: ActiveValue::Set(1),
            luggage_count: ActiveValue::Set(0),
            transfer_type: ActiveValue::Set(None),
            car_class: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            price: ActiveValue::Set(self.price),
            commission_amount: ActiveValue::Set(None),
            driver_amount: ActiveValue::Set(None),
            payment_type: ActiveValue::Set(self.payment_type),
            payment_from_balance: ActiveValue::Set(self.payment_from_balance),
            prepay_amount: ActiveValue::Set(0),
            payment_url: ActiveValue::Set(None),
            payment_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unassigned order in status created for `user_id`.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}
