use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterUserDto {
    pub phone: String,
    pub name: String,
    pub password: String,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterDriverDto {
    pub phone: String,
    pub name: String,
    pub password: String,
    pub email: Option<String>,
    #[serde(default)]
    pub car_brand: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub car_color: String,
    #[serde(default)]
    pub car_number: String,
}

/// Login body for users and drivers.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PhoneLoginDto {
    pub phone: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AdminLoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub phone: String,
    pub name: String,
    pub email: Option<String>,
    pub balance: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DriverDto {
    pub id: i32,
    pub phone: String,
    pub name: String,
    pub email: Option<String>,
    pub car_brand: String,
    pub car_model: String,
    pub car_color: String,
    pub car_number: String,
    pub status: DriverStatus,
    pub is_active: bool,
    pub is_online: bool,
    pub balance: Decimal,
    /// Commission percentage withheld from each accepted order.
    pub commission_rate: Decimal,
    pub total_orders: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AdminDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// The account behind the current session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccountDto {
    Admin(AdminDto),
    User(UserDto),
    Driver(DriverDto),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Pending,
    Approved,
    Rejected,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Admin update of a driver. Omitted fields stay unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateDriverDto {
    pub status: Option<DriverStatus>,
    /// Commission percentage, 0 to 100 with up to two decimals.
    pub commission_rate: Option<Decimal>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SetActiveDto {
    pub is_active: bool,
}
