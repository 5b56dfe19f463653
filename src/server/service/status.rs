use sea_orm::DatabaseConnection;

use crate::server::{
    data::{order::OrderRepository, order_status::OrderStatusRepository},
    error::AppError,
    model::status::{is_builtin_status, OrderStatus, SaveOrderStatusParam},
};

/// Maintains the order status lookup table shown to passengers and admins.
pub struct OrderStatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderStatusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<OrderStatus>, AppError> {
        Ok(OrderStatusRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, param: SaveOrderStatusParam) -> Result<OrderStatus, AppError> {
        let status = OrderStatusRepository::new(self.db).create(param).await?;
        tracing::info!("Created order status {} '{}'", status.id, status.name);

        Ok(status)
    }

    pub async fn update(
        &self,
        status_id: i32,
        param: SaveOrderStatusParam,
    ) -> Result<OrderStatus, AppError> {
        OrderStatusRepository::new(self.db)
            .update(status_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order status {} not found", status_id)))
    }

    /// Deletes a custom status.
    ///
    /// # Returns
    /// - `Ok(())` - Status deleted
    /// - `Err(AppError::BadRequest)` - Status is one of the workflow statuses or still
    ///   referenced by orders
    /// - `Err(AppError::NotFound)` - No status with that id
    pub async fn delete(&self, status_id: i32) -> Result<(), AppError> {
        if is_builtin_status(status_id) {
            return Err(AppError::BadRequest(format!(
                "Order status {} is required by the order workflow",
                status_id
            )));
        }

        let in_use = OrderRepository::new(self.db)
            .count_with_status(status_id)
            .await?;
        if in_use > 0 {
            return Err(AppError::BadRequest(format!(
                "Order status {} is used by {} orders",
                status_id, in_use
            )));
        }

        if !OrderStatusRepository::new(self.db).delete(status_id).await? {
            return Err(AppError::NotFound(format!(
                "Order status {} not found",
                status_id
            )));
        }

        Ok(())
    }
}
