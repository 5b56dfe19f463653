use crate::{
    model::rideshare::BookingStatus,
    server::{
        data::rideshare_booking::RideshareBookingRepository,
        model::rideshare::{BookSeatsParam, NewBookingParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
