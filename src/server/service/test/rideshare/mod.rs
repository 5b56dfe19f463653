use crate::{
    model::rideshare::{BookingStatus, RideshareStatus},
    server::{
        error::{workflow::WorkflowError, AppError},
        model::rideshare::BookSeatsParam,
        service::{notification::Notifier, rideshare::RideshareService},
    },
};
use test_utils::{builder::TestBuilder, factory};

use super::recording_notifier;

mod book;
mod cancel_booking;
mod update_status;

fn book_param(rideshare_id: i32, seats_count: i32) -> BookSeatsParam {
    BookSeatsParam {
        rideshare_id,
        seats_count,
        passenger_name: "Pavel".to_string(),
        passenger_phone: "+79995550000".to_string(),
        passenger_email: Some("pavel@example.com".to_string()),
    }
}
