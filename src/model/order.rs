use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    #[default]
    Cash,
    Full,
    Prepay,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Full => "full",
            Self::Prepay => "prepay",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cash" => Some(Self::Cash),
            "full" => Some(Self::Full),
            "prepay" => Some(Self::Prepay),
            _ => None,
        }
    }
}

/// Booking request for a transfer.
///
/// Required fields are optional here so that a missing one is reported as a validation
/// error naming the field instead of a deserialization failure.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct CreateOrderDto {
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub pickup_at: Option<DateTime<Utc>>,
    pub flight_number: Option<String>,
    pub passenger_name: Option<String>,
    pub passenger_phone: Option<String>,
    pub passenger_email: Option<String>,
    pub passengers_count: Option<i32>,
    pub luggage_count: Option<i32>,
    pub transfer_type: Option<String>,
    pub car_class: Option<String>,
    pub notes: Option<String>,
    pub price: Option<Decimal>,
    pub payment_type: PaymentType,
    pub payment_from_balance: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub driver_id: Option<i32>,
    pub status_id: i32,
    pub from_location: String,
    pub to_location: String,
    pub pickup_at: DateTime<Utc>,
    pub flight_number: Option<String>,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub passenger_email: Option<String>,
    pub passengers_count: i32,
    pub luggage_count: i32,
    pub transfer_type: Option<String>,
    pub car_class: Option<String>,
    pub notes: Option<String>,
    pub price: Decimal,
    pub commission_amount: Option<Decimal>,
    pub driver_amount: Option<Decimal>,
    pub payment_type: PaymentType,
    pub payment_from_balance: bool,
    pub prepay_amount: Decimal,
    pub payment_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin update of an order's status, price or notes.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateOrderDto {
    pub status_id: i32,
    pub price: Option<Decimal>,
    pub notes: Option<String>,
}
