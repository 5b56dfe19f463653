use crate::{
    model::order::PaymentType,
    server::{
        error::{auth::AuthError, ledger::LedgerError, workflow::WorkflowError, AppError},
        model::{
            account::{Account, AccountRef, Admin, Driver, User},
            order::{PlaceOrderParam, UpdateOrderParam},
            status::{ORDER_STATUS_ACCEPTED, ORDER_STATUS_CANCELLED, ORDER_STATUS_IN_PROGRESS},
        },
        service::{
            ledger::LedgerService,
            notification::Notifier,
            order::OrderService,
            payment::PaymentProvider,
        },
    },
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use super::{recording_notifier, FailingPaymentProvider, FixedPaymentProvider};

mod accept;
mod place;

const APP_URL: &str = "https://transfer.test";

fn place_param(
    user_id: i32,
    price: i64,
    payment_type: PaymentType,
    payment_from_balance: bool,
) -> PlaceOrderParam {
    PlaceOrderParam {
        user_id,
        from_location: "Sheremetyevo".to_string(),
        to_location: "Tverskaya 7".to_string(),
        pickup_at: Utc::now() + Duration::hours(6),
        flight_number: Some("SU1402".to_string()),
        passenger_name: "Maria".to_string(),
        passenger_phone: "+79991112233".to_string(),
        passenger_email: Some("maria@example.com".to_string()),
        passengers_count: 2,
        luggage_count: 2,
        transfer_type: Some("airport".to_string()),
        car_class: Some("comfort".to_string()),
        notes: None,
        price,
        payment_type,
        payment_from_balance,
    }
}
