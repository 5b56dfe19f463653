//! Rideshare repository and seat inventory counter.
//!
//! `seats_available` is only changed through `reserve_seats` and `release_seats`, each a
//! single conditional `UPDATE`.

use crate::{
    model::rideshare::RideshareStatus,
    server::model::rideshare::{CreateRideshareParam, Rideshare},
};
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct RideshareRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RideshareRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active rideshare with every seat available.
    pub async fn create(&self, param: CreateRideshareParam) -> Result<Rideshare, DbErr> {
        let entity = entity::prelude::Rideshare::insert(entity::rideshare::ActiveModel {
            route_from: ActiveValue::Set(param.route_from),
            route_to: ActiveValue::Set(param.route_to),
            departure_at: ActiveValue::Set(param.departure_at),
            seats_total: ActiveValue::Set(param.seats_total),
            seats_available: ActiveValue::Set(param.seats_total),
            price_per_seat: ActiveValue::Set(param.price_per_seat),
            car_class: ActiveValue::Set(param.car_class),
            notes: ActiveValue::Set(param.notes),
            created_by_name: ActiveValue::Set(param.created_by_name),
            created_by_phone: ActiveValue::Set(param.created_by_phone),
            status: ActiveValue::Set(RideshareStatus::Active.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Rideshare::from_entity(entity))
    }

    pub async fn find_by_id(&self, rideshare_id: i32) -> Result<Option<Rideshare>, DbErr> {
        let entity = entity::prelude::Rideshare::find_by_id(rideshare_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Rideshare::from_entity))
    }

    /// Takes `seats` from an active rideshare if enough remain.
    ///
    /// # Returns
    /// - `Ok(true)` - Seats reserved
    /// - `Ok(false)` - Rideshare missing, not active, or short of seats
    /// - `Err(DbErr)` - Database error during update
    pub async fn reserve_seats(&self, rideshare_id: i32, seats: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Rideshare::update_many()
            .col_expr(
                entity::rideshare::Column::SeatsAvailable,
                Expr::col(entity::rideshare::Column::SeatsAvailable).sub(seats),
            )
            .filter(entity::rideshare::Column::Id.eq(rideshare_id))
            .filter(entity::rideshare::Column::Status.eq(RideshareStatus::Active.as_str()))
            .filter(entity::rideshare::Column::SeatsAvailable.gte(seats))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Returns `seats` to the inventory, never exceeding `seats_total`.
    pub async fn release_seats(&self, rideshare_id: i32, seats: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Rideshare::update_many()
            .col_expr(
                entity::rideshare::Column::SeatsAvailable,
                Expr::col(entity::rideshare::Column::SeatsAvailable).add(seats),
            )
            .filter(entity::rideshare::Column::Id.eq(rideshare_id))
            .filter(
                Expr::col(entity::rideshare::Column::SeatsAvailable)
                    .add(seats)
                    .lte(Expr::col(entity::rideshare::Column::SeatsTotal)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Sets the lifecycle status without touching the seat counter.
    ///
    /// # Returns
    /// - `Ok(Some(Rideshare))` - Updated rideshare
    /// - `Ok(None)` - No rideshare with that id
    pub async fn update_status(
        &self,
        rideshare_id: i32,
        status: RideshareStatus,
    ) -> Result<Option<Rideshare>, DbErr> {
        entity::prelude::Rideshare::update_many()
            .col_expr(
                entity::rideshare::Column::Status,
                Expr::value(status.as_str()),
            )
            .filter(entity::rideshare::Column::Id.eq(rideshare_id))
            .exec(self.db)
            .await?;

        self.find_by_id(rideshare_id).await
    }

    /// Gets active rideshares departing after `now`, soonest first.
    pub async fn get_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Rideshare>, DbErr> {
        let entities = entity::prelude::Rideshare::find()
            .filter(entity::rideshare::Column::Status.eq(RideshareStatus::Active.as_str()))
            .filter(entity::rideshare::Column::DepartureAt.gt(now))
            .order_by_asc(entity::rideshare::Column::DepartureAt)
            .order_by_asc(entity::rideshare::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rideshare::from_entity).collect())
    }
}
