//! Seat inventory workflow for shared rides.
//!
//! Seats are reserved with a conditional decrement of `seats_available`, so concurrent
//! bookings can never oversell a ride. A booking is only inserted inside the same
//! transaction that reserved its seats.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::rideshare::RideshareStatus,
    server::{
        data::{rideshare::RideshareRepository, rideshare_booking::RideshareBookingRepository},
        error::{workflow::WorkflowError, AppError},
        model::rideshare::{
            BookSeatsParam, Booking, CreateRideshareParam, NewBookingParam, Rideshare,
        },
        service::notification::{message, Notifier},
        util::token::{generate_token, CANCEL_TOKEN_LENGTH},
    },
};

pub struct RideshareService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> RideshareService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Publishes a new rideshare with every seat available and alerts the staff.
    pub async fn create(&self, param: CreateRideshareParam) -> Result<Rideshare, AppError> {
        let rideshare = RideshareRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Rideshare #{} created: {} → {}, {} seats",
            rideshare.id,
            rideshare.route_from,
            rideshare.route_to,
            rideshare.seats_total
        );

        self.notifier.dispatch(message::rideshare_created(&rideshare));

        Ok(rideshare)
    }

    /// Active rideshares that have not departed yet, soonest first.
    pub async fn get_upcoming(&self) -> Result<Vec<Rideshare>, AppError> {
        Ok(RideshareRepository::new(self.db)
            .get_upcoming(Utc::now())
            .await?)
    }

    pub async fn get_by_id(&self, rideshare_id: i32) -> Result<Rideshare, AppError> {
        let rideshare = RideshareRepository::new(self.db)
            .find_by_id(rideshare_id)
            .await?
            .ok_or(WorkflowError::RideshareNotFound(rideshare_id))?;

        Ok(rideshare)
    }

    /// Books seats on an active rideshare.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Confirmed booking carrying its cancel token
    /// - `Err(WorkflowError::RideshareNotFound)` - Unknown or inactive rideshare
    /// - `Err(WorkflowError::InsufficientSeats)` - Fewer seats available than requested
    pub async fn book(&self, param: BookSeatsParam) -> Result<Booking, AppError> {
        let rideshare_id = param.rideshare_id;
        let requested = param.seats_count;

        let txn = self.db.begin().await?;
        let rideshares = RideshareRepository::new(&txn);
        if !rideshares.reserve_seats(rideshare_id, requested).await? {
            let rideshare = rideshares
                .find_by_id(rideshare_id)
                .await?
                .filter(|r| r.status == RideshareStatus::Active)
                .ok_or(WorkflowError::RideshareNotFound(rideshare_id))?;

            return Err(WorkflowError::InsufficientSeats {
                requested,
                available: rideshare.seats_available,
            }
            .into());
        }

        let booking = RideshareBookingRepository::new(&txn)
            .create(NewBookingParam {
                booking: param,
                cancel_token: generate_token(CANCEL_TOKEN_LENGTH),
            })
            .await?;
        let rideshare = rideshares
            .find_by_id(rideshare_id)
            .await?
            .ok_or(WorkflowError::RideshareNotFound(rideshare_id))?;
        txn.commit().await?;

        tracing::info!(
            "Booking #{} reserved {} seats on rideshare #{} ({} left)",
            booking.id,
            booking.seats_count,
            rideshare_id,
            rideshare.seats_available
        );

        self.notifier
            .dispatch(message::seats_booked(&rideshare, &booking));

        Ok(booking)
    }

    /// Cancels a confirmed booking by its token and returns its seats.
    ///
    /// Repeating the call with the same token fails with `BookingNotFound`; the seats
    /// are released exactly once. When the rideshare cannot take the seats back without
    /// exceeding its total, nothing is changed and `InternalError` is returned.
    pub async fn cancel_booking(&self, cancel_token: &str) -> Result<Booking, AppError> {
        let txn = self.db.begin().await?;
        let bookings = RideshareBookingRepository::new(&txn);
        if !bookings.cancel_by_token(cancel_token).await? {
            return Err(WorkflowError::BookingNotFound.into());
        }
        let booking = bookings
            .find_by_token(cancel_token)
            .await?
            .ok_or(WorkflowError::BookingNotFound)?;

        let released = RideshareRepository::new(&txn)
            .release_seats(booking.rideshare_id, booking.seats_count)
            .await?;
        if !released {
            return Err(AppError::InternalError(format!(
                "rideshare #{} cannot take back {} seats from booking #{}",
                booking.rideshare_id, booking.seats_count, booking.id
            )));
        }
        txn.commit().await?;

        tracing::info!(
            "Booking #{} cancelled, {} seats returned to rideshare #{}",
            booking.id,
            booking.seats_count,
            booking.rideshare_id
        );

        self.notifier.dispatch(message::booking_cancelled(&booking));

        Ok(booking)
    }

    /// Admin status change. Bookings and the seat counter are left as they are.
    pub async fn update_status(
        &self,
        rideshare_id: i32,
        status: RideshareStatus,
    ) -> Result<Rideshare, AppError> {
        let rideshare = RideshareRepository::new(self.db)
            .update_status(rideshare_id, status)
            .await?
            .ok_or(WorkflowError::RideshareNotFound(rideshare_id))?;

        tracing::info!("Rideshare #{} set to {}", rideshare_id, status.as_str());

        Ok(rideshare)
    }

    pub async fn get_bookings(&self, rideshare_id: i32) -> Result<Vec<Booking>, AppError> {
        self.get_by_id(rideshare_id).await?;

        Ok(RideshareBookingRepository::new(self.db)
            .get_by_rideshare(rideshare_id)
            .await?)
    }
}
