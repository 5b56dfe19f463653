use crate::{
    model::order::PaymentType,
    server::{
        data::order::OrderRepository,
        model::{
            order::{ApplyOrderUpdateParam, AssignDriverParam, PlaceOrderParam},
            status::{
                ORDER_STATUS_ACCEPTED, ORDER_STATUS_CANCELLED, ORDER_STATUS_COMPLETED,
                ORDER_STATUS_CREATED, ORDER_STATUS_IN_PROGRESS,
            },
        },
    },
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign_driver;
mod cancel;
mod create;
mod get_available;

fn place_param(user_id: i32, price: i64) -> PlaceOrderParam {
    PlaceOrderParam {
        user_id,
        from_location: "SVO".to_string(),
        to_location: "Tverskaya 1".to_string(),
        pickup_at: Utc::now(),
        flight_number: Some("SU100".to_string()),
        passenger_name: "Ivan".to_string(),
        passenger_phone: "+79990000000".to_string(),
        passenger_email: None,
        passengers_count: 2,
        luggage_count: 1,
        transfer_type: None,
        car_class: Some("comfort".to_string()),
        notes: None,
        price,
        payment_type: PaymentType::Prepay,
        payment_from_balance: false,
    }
}
