//! Order data repository for database operations.
//!
//! State transitions that can race (driver acceptance, cancellation) are conditional
//! `UPDATE` statements whose affected-row count tells the caller whether it won.

use crate::server::model::{
    order::{ApplyOrderUpdateParam, AssignDriverParam, Order, PlaceOrderParam},
    status::{
        ORDER_STATUS_ACCEPTED, ORDER_STATUS_CANCELLED, ORDER_STATUS_COMPLETED,
        ORDER_STATUS_CREATED,
    },
};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository providing database operations for transfer orders.
pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `OrderRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new order in the created status.
    ///
    /// # Arguments
    /// - `param` - Validated booking request
    /// - `prepay_amount` - Upfront share in minor units, 0 unless the payment type is prepay
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: PlaceOrderParam, prepay_amount: i64) -> Result<Order, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::Order::insert(entity::order::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            driver_id: ActiveValue::Set(None),
            status_id: ActiveValue::Set(ORDER_STATUS_CREATED),
            from_location: ActiveValue::Set(param.from_location),
            to_location: ActiveValue::Set(param.to_location),
            pickup_at: ActiveValue::Set(param.pickup_at),
            flight_number: ActiveValue::Set(param.flight_number),
            passenger_name: ActiveValue::Set(param.passenger_name),
            passenger_phone: ActiveValue::Set(param.passenger_phone),
            passenger_email: ActiveValue::Set(param.passenger_email),
            passengers_count: ActiveValue::Set(param.passengers_count),
            luggage_count: ActiveValue::Set(param.luggage_count),
            transfer_type: ActiveValue::Set(param.transfer_type),
            car_class: ActiveValue::Set(param.car_class),
            notes: ActiveValue::Set(param.notes),
            price: ActiveValue::Set(param.price),
            commission_amount: ActiveValue::Set(None),
            driver_amount: ActiveValue::Set(None),
            payment_type: ActiveValue::Set(param.payment_type.as_str().to_string()),
            payment_from_balance: ActiveValue::Set(param.payment_from_balance),
            prepay_amount: ActiveValue::Set(prepay_amount),
            payment_url: ActiveValue::Set(None),
            payment_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Order::from_entity(entity))
    }

    /// Finds an order by id.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, DbErr> {
        let entity = entity::prelude::Order::find_by_id(order_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Order::from_entity))
    }

    /// Assigns a driver to an unclaimed order.
    ///
    /// Matches only while the order has no driver, is still in the created status and
    /// its price equals the one the commission was computed from.
    ///
    /// # Returns
    /// - `Ok(true)` - This call claimed the order
    /// - `Ok(false)` - Order missing, already claimed, or changed since it was read
    /// - `Err(DbErr)` - Database error during update
    pub async fn assign_driver(&self, param: AssignDriverParam) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::DriverId, Expr::value(param.driver_id))
            .col_expr(entity::order::Column::StatusId, Expr::value(ORDER_STATUS_ACCEPTED))
            .col_expr(
                entity::order::Column::CommissionAmount,
                Expr::value(param.commission_amount),
            )
            .col_expr(
                entity::order::Column::DriverAmount,
                Expr::value(param.driver_amount),
            )
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::order::Column::Id.eq(param.order_id))
            .filter(entity::order::Column::DriverId.is_null())
            .filter(entity::order::Column::StatusId.eq(ORDER_STATUS_CREATED))
            .filter(entity::order::Column::Price.eq(param.price))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves an order to cancelled unless it is already completed or cancelled.
    ///
    /// # Returns
    /// - `Ok(true)` - Order was cancelled by this call
    /// - `Ok(false)` - Order missing or already terminal
    /// - `Err(DbErr)` - Database error during update
    pub async fn cancel(&self, order_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::StatusId,
                Expr::value(ORDER_STATUS_CANCELLED),
            )
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::order::Column::Id.eq(order_id))
            .filter(
                entity::order::Column::StatusId
                    .is_not_in([ORDER_STATUS_COMPLETED, ORDER_STATUS_CANCELLED]),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Applies an admin update: status, and optionally price, commission split and notes.
    ///
    /// Matches only while the order keeps the status and price the update was checked
    /// against.
    ///
    /// # Returns
    /// - `Ok(true)` - Order was updated
    /// - `Ok(false)` - Order missing or changed since it was read
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: ApplyOrderUpdateParam) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::StatusId, Expr::value(param.status_id))
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()));
        if let Some(price) = param.price {
            query = query.col_expr(entity::order::Column::Price, Expr::value(price));
        }
        if let Some((commission_amount, driver_amount)) = param.split {
            query = query
                .col_expr(
                    entity::order::Column::CommissionAmount,
                    Expr::value(commission_amount),
                )
                .col_expr(entity::order::Column::DriverAmount, Expr::value(driver_amount));
        }
        if let Some(notes) = param.notes {
            query = query.col_expr(entity::order::Column::Notes, Expr::value(notes));
        }

        let result = query
            .filter(entity::order::Column::Id.eq(param.order_id))
            .filter(entity::order::Column::StatusId.eq(param.expected_status_id))
            .filter(entity::order::Column::Price.eq(param.expected_price))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Stores the payment link returned by the payment provider.
    pub async fn set_payment_link(
        &self,
        order_id: i32,
        payment_url: &str,
        payment_id: &str,
    ) -> Result<(), DbErr> {
        entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::PaymentUrl, Expr::value(payment_url))
            .col_expr(entity::order::Column::PaymentId, Expr::value(payment_id))
            .filter(entity::order::Column::Id.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets orders placed by a user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Order::from_entity).collect())
    }

    /// Gets orders assigned to a driver, newest first.
    pub async fn get_by_driver(&self, driver_id: i32) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::DriverId.eq(driver_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Order::from_entity).collect())
    }

    /// Gets unclaimed orders in the created status, oldest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of orders to return
    pub async fn get_available(&self, limit: u64) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::DriverId.is_null())
            .filter(entity::order::Column::StatusId.eq(ORDER_STATUS_CREATED))
            .order_by_asc(entity::order::Column::CreatedAt)
            .order_by_asc(entity::order::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Order::from_entity).collect())
    }

    /// Gets all orders with pagination, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of orders per page
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders for the requested page and total order count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let orders = entities.into_iter().map(Order::from_entity).collect();

        Ok((orders, total))
    }

    /// Counts orders currently in a status, used before deleting the status.
    pub async fn count_with_status(&self, status_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::StatusId.eq(status_id))
            .count(self.db)
            .await
    }
}
