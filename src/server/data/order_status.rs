//! Order status lookup repository.

use crate::server::model::status::{OrderStatus, SaveOrderStatusParam};
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct OrderStatusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderStatusRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every status ordered by id.
    pub async fn get_all(&self) -> Result<Vec<OrderStatus>, DbErr> {
        let entities = entity::prelude::OrderStatus::find()
            .order_by_asc(entity::order_status::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(OrderStatus::from_entity).collect())
    }

    pub async fn find_by_id(&self, status_id: i32) -> Result<Option<OrderStatus>, DbErr> {
        let entity = entity::prelude::OrderStatus::find_by_id(status_id)
            .one(self.db)
            .await?;

        Ok(entity.map(OrderStatus::from_entity))
    }

    pub async fn create(&self, param: SaveOrderStatusParam) -> Result<OrderStatus, DbErr> {
        let entity = entity::prelude::OrderStatus::insert(entity::order_status::ActiveModel {
            name: ActiveValue::Set(param.name),
            color: ActiveValue::Set(param.color),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(OrderStatus::from_entity(entity))
    }

    /// Renames or recolors a status.
    ///
    /// # Returns
    /// - `Ok(Some(OrderStatus))` - Updated status
    /// - `Ok(None)` - No status with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        status_id: i32,
        param: SaveOrderStatusParam,
    ) -> Result<Option<OrderStatus>, DbErr> {
        if entity::prelude::OrderStatus::find_by_id(status_id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let entity = entity::prelude::OrderStatus::update(entity::order_status::ActiveModel {
            id: ActiveValue::Unchanged(status_id),
            name: ActiveValue::Set(param.name),
            color: ActiveValue::Set(param.color),
        })
        .exec(self.db)
        .await?;

        Ok(Some(OrderStatus::from_entity(entity)))
    }

    /// Deletes a status.
    ///
    /// # Returns
    /// - `Ok(true)` - Status deleted
    /// - `Ok(false)` - No status with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, status_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::OrderStatus::delete_by_id(status_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
