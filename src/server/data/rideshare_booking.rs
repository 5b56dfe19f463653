//! Rideshare booking repository.

use crate::{
    model::rideshare::BookingStatus,
    server::model::rideshare::{Booking, NewBookingParam},
};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct RideshareBookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RideshareBookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a confirmed booking. Seats must already be reserved on the rideshare.
    pub async fn create(&self, param: NewBookingParam) -> Result<Booking, DbErr> {
        let booking = param.booking;

        let entity =
            entity::prelude::RideshareBooking::insert(entity::rideshare_booking::ActiveModel {
                rideshare_id: ActiveValue::Set(booking.rideshare_id),
                passenger_name: ActiveValue::Set(booking.passenger_name),
                passenger_phone: ActiveValue::Set(booking.passenger_phone),
                passenger_email: ActiveValue::Set(booking.passenger_email),
                seats_count: ActiveValue::Set(booking.seats_count),
                status: ActiveValue::Set(BookingStatus::Confirmed.as_str().to_string()),
                cancel_token: ActiveValue::Set(param.cancel_token),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .exec_with_returning(self.db)
            .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn find_by_token(&self, cancel_token: &str) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::RideshareBooking::find()
            .filter(entity::rideshare_booking::Column::CancelToken.eq(cancel_token))
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Moves a confirmed booking to cancelled.
    ///
    /// # Returns
    /// - `Ok(true)` - This call cancelled the booking
    /// - `Ok(false)` - Unknown token or booking already cancelled
    /// - `Err(DbErr)` - Database error during update
    pub async fn cancel_by_token(&self, cancel_token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::RideshareBooking::update_many()
            .col_expr(
                entity::rideshare_booking::Column::Status,
                Expr::value(BookingStatus::Cancelled.as_str()),
            )
            .filter(entity::rideshare_booking::Column::CancelToken.eq(cancel_token))
            .filter(
                entity::rideshare_booking::Column::Status.eq(BookingStatus::Confirmed.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets every booking of a rideshare, oldest first.
    pub async fn get_by_rideshare(&self, rideshare_id: i32) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::RideshareBooking::find()
            .filter(entity::rideshare_booking::Column::RideshareId.eq(rideshare_id))
            .order_by_asc(entity::rideshare_booking::Column::CreatedAt)
            .order_by_asc(entity::rideshare_booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }
}
