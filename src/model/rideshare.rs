use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RideshareStatus {
    Active,
    Cancelled,
    Completed,
}

impl RideshareStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct CreateRideshareDto {
    pub route_from: Option<String>,
    pub route_to: Option<String>,
    pub departure_at: Option<DateTime<Utc>>,
    pub seats_total: Option<i32>,
    pub price_per_seat: Option<Decimal>,
    pub car_class: Option<String>,
    pub notes: Option<String>,
    pub created_by_name: Option<String>,
    pub created_by_phone: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RideshareDto {
    pub id: i32,
    pub route_from: String,
    pub route_to: String,
    pub departure_at: DateTime<Utc>,
    pub seats_total: i32,
    pub seats_available: i32,
    pub price_per_seat: Decimal,
    pub car_class: Option<String>,
    pub notes: Option<String>,
    pub created_by_name: String,
    pub status: RideshareStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct BookSeatsDto {
    pub seats_count: i32,
    pub passenger_name: Option<String>,
    pub passenger_phone: Option<String>,
    pub passenger_email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Booking as returned to the passenger right after booking and to admins.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub rideshare_id: i32,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub passenger_email: Option<String>,
    pub seats_count: i32,
    pub status: BookingStatus,
    /// Secret presented to cancel the booking without an account.
    pub cancel_token: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CancelBookingDto {
    pub cancel_token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateRideshareStatusDto {
    pub status: RideshareStatus,
}
