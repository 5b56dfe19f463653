//! Admin management of passenger and driver accounts.

use sea_orm::DatabaseConnection;

use crate::{
    model::account::DriverStatus,
    server::{
        data::{driver::DriverRepository, user::UserRepository},
        error::AppError,
        model::account::{Driver, UpdateDriverParam, User},
    },
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies an admin review to a driver.
    ///
    /// Changing the status without an explicit `is_active` activates approved drivers
    /// and deactivates every other status.
    ///
    /// # Returns
    /// - `Ok(Driver)` - Driver after the update
    /// - `Err(AppError::NotFound)` - No driver with that id
    pub async fn update_driver(&self, mut param: UpdateDriverParam) -> Result<Driver, AppError> {
        if let (Some(status), None) = (param.status, param.is_active) {
            param.is_active = Some(status == DriverStatus::Approved);
        }
        let driver_id = param.driver_id;

        let driver = DriverRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", driver_id)))?;

        tracing::info!(
            "Driver {} updated: status {}, active {}, commission {} bp",
            driver.id,
            driver.status.as_str(),
            driver.is_active,
            driver.commission_rate_bp
        );

        Ok(driver)
    }

    pub async fn set_user_active(&self, user_id: i32, is_active: bool) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_active(user_id, is_active)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        tracing::info!("User {} active set to {}", user.id, user.is_active);

        Ok(user)
    }

    /// Drivers newest first, optionally filtered by status.
    ///
    /// # Returns
    /// - `Ok((drivers, total))` - Requested page and the total matching count
    pub async fn list_drivers(
        &self,
        status: Option<DriverStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Driver>, u64), AppError> {
        Ok(DriverRepository::new(self.db)
            .get_all_paginated(status, page, per_page)
            .await?)
    }

    pub async fn list_users(&self, page: u64, per_page: u64) -> Result<(Vec<User>, u64), AppError> {
        Ok(UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?)
    }
}
