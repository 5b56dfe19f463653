//! Driver data repository for database operations.

use crate::{
    model::account::DriverStatus,
    server::model::account::{CreateDriverParam, Driver, UpdateDriverParam},
};
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Commission rate assigned to newly registered drivers, in basis points.
pub const DEFAULT_COMMISSION_RATE_BP: i32 = 1500;

/// Repository providing database operations for driver accounts.
pub struct DriverRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DriverRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a driver awaiting review.
    ///
    /// New drivers are `pending`, inactive, offline and carry the default commission rate.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The created driver
    /// - `Err(DbErr)` - Database error, including unique violation on `phone`
    pub async fn create(&self, param: CreateDriverParam) -> Result<Driver, DbErr> {
        let entity = entity::prelude::Driver::insert(entity::driver::ActiveModel {
            phone: ActiveValue::Set(param.phone),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            car_brand: ActiveValue::Set(param.car_brand),
            car_model: ActiveValue::Set(param.car_model),
            car_color: ActiveValue::Set(param.car_color),
            car_number: ActiveValue::Set(param.car_number),
            status: ActiveValue::Set(DriverStatus::Pending.as_str().to_string()),
            is_active: ActiveValue::Set(false),
            is_online: ActiveValue::Set(false),
            balance: ActiveValue::Set(0),
            commission_rate_bp: ActiveValue::Set(DEFAULT_COMMISSION_RATE_BP),
            total_orders: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Driver::from_entity(entity))
    }

    pub async fn find_by_id(&self, driver_id: i32) -> Result<Option<Driver>, DbErr> {
        let entity = entity::prelude::Driver::find_by_id(driver_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Driver::from_entity))
    }

    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<Driver>, DbErr> {
        let entity = entity::prelude::Driver::find()
            .filter(entity::driver::Column::Phone.eq(phone))
            .one(self.db)
            .await?;

        Ok(entity.map(Driver::from_entity))
    }

    /// Applies admin changes to a driver. Fields left as `None` are not touched.
    ///
    /// # Returns
    /// - `Ok(Some(Driver))` - Driver after the update
    /// - `Ok(None)` - No driver with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateDriverParam) -> Result<Option<Driver>, DbErr> {
        let Some(existing) = entity::prelude::Driver::find_by_id(param.driver_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::driver::ActiveModel = existing.into();
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(rate) = param.commission_rate_bp {
            active_model.commission_rate_bp = ActiveValue::Set(rate);
        }
        if let Some(is_active) = param.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }

        let entity = entity::prelude::Driver::update(active_model)
            .exec(self.db)
            .await?;

        Ok(Some(Driver::from_entity(entity)))
    }

    /// Adds one to the driver's lifetime order counter.
    pub async fn increment_total_orders(&self, driver_id: i32) -> Result<(), DbErr> {
        entity::prelude::Driver::update_many()
            .col_expr(
                entity::driver::Column::TotalOrders,
                Expr::col(entity::driver::Column::TotalOrders).add(1),
            )
            .filter(entity::driver::Column::Id.eq(driver_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets drivers with pagination, newest first, optionally filtered by review status.
    ///
    /// # Returns
    /// - `Ok((drivers, total))` - Drivers for the requested page and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        status: Option<DriverStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Driver>, u64), DbErr> {
        let mut query = entity::prelude::Driver::find();
        if let Some(status) = status {
            query = query.filter(entity::driver::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::driver::Column::CreatedAt)
            .order_by_desc(entity::driver::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let drivers = entities.into_iter().map(Driver::from_entity).collect();

        Ok((drivers, total))
    }
}
