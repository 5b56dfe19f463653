//! Driver factory for creating test driver accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drivers with customizable fields.
///
/// Drivers are created pending and inactive by default, matching a fresh registration.
/// Use `approved()` for a driver allowed to accept orders.
///
/// # Example
///
/// ```rust,ignore
/// let driver = DriverFactory::new(&db)
///     .approved()
///     .commission_rate_bp(1000)
///     .build()
///     .await?;
/// ```
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    phone: String,
    name: String,
    password_hash: String,
    status: String,
    is_active: bool,
    balance: i64,
    commission_rate_bp: i32,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory with default values.
    ///
    /// Defaults:
    /// - phone: `"+7910{id}"`
    /// - name: `"Driver {id}"`
    /// - status: `"pending"`, is_active: `false`
    /// - balance: `0`
    /// - commission_rate_bp: `1500` (15%)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            phone: format!("+7910{:07}", id),
            name: format!("Driver {}", id),
            password_hash: "unset$unset".to_string(),
            status: "pending".to_string(),
            is_active: false,
            balance: 0,
            commission_rate_bp: 1500,
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Marks the driver approved and active.
    pub fn approved(mut self) -> Self {
        self.status = "approved".to_string();
        self.is_active = true;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the starting balance in minor currency units.
    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    /// Sets the commission rate in basis points (1500 = 15%).
    pub fn commission_rate_bp(mut self, commission_rate_bp: i32) -> Self {
        self.commission_rate_bp = commission_rate_bp;
        self
    }

    /// Builds and inserts the driver entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::driver::Model)` - Created driver entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        entity::driver::ActiveModel {
            phone: ActiveValue::Set(self.phone),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(None),
            password_hash: ActiveValue::Set(self.password_hash),
            car_brand: ActiveValue::Set("Toyota".to_string()),
            car_model: ActiveValue::Set("Camry".to_string()),
            car_color: ActiveValue::Set("Black".to_string()),
            car_number: ActiveValue::Set("A123BC".to_string()),
            status: ActiveValue::Set(self.status),
            is_active: ActiveValue::Set(self.is_active),
            is_online: ActiveValue::Set(false),
            balance: ActiveValue::Set(self.balance),
            commission_rate_bp: ActiveValue::Set(self.commission_rate_bp),
            total_orders: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending driver with default values.
pub async fn create_driver(db: &DatabaseConnection) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db).build().await
}
