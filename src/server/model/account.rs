//! Account domain models and parameters.
//!
//! Covers passengers (users), drivers and admins, the account references the ledger
//! operates on, and the principal stored in the session.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        account::{
            AccountDto, AdminDto, DriverDto, DriverStatus, RegisterDriverDto, RegisterUserDto,
            UpdateDriverDto, UserDto,
        },
        balance::AccountKind,
    },
    server::{
        error::AppError,
        util::{
            money::{from_minor, rate_from_bp, rate_to_bp},
            password::hash_password,
            validate::{optional_text, required_text},
        },
    },
};

/// Minimum accepted password length at registration.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Reference to an account holding a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountRef {
    User(i32),
    Driver(i32),
}

impl AccountRef {
    pub fn from_parts(kind: AccountKind, id: i32) -> Self {
        match kind {
            AccountKind::User => Self::User(id),
            AccountKind::Driver => Self::Driver(id),
        }
    }

    pub fn kind(&self) -> AccountKind {
        match self {
            Self::User(_) => AccountKind::User,
            Self::Driver(_) => AccountKind::Driver,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::User(id) | Self::Driver(id) => *id,
        }
    }

    /// Splits into the nullable `(user_id, driver_id)` column pair used by ledger tables.
    pub fn columns(&self) -> (Option<i32>, Option<i32>) {
        match self {
            Self::User(id) => (Some(*id), None),
            Self::Driver(id) => (None, Some(*id)),
        }
    }

    /// Inverse of `columns()`. Returns `None` when neither column is set.
    pub fn from_columns(user_id: Option<i32>, driver_id: Option<i32>) -> Option<Self> {
        match (user_id, driver_id) {
            (Some(id), _) => Some(Self::User(id)),
            (None, Some(id)) => Some(Self::Driver(id)),
            (None, None) => None,
        }
    }
}

impl fmt::Display for AccountRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user {}", id),
            Self::Driver(id) => write!(f, "driver {}", id),
        }
    }
}

/// Identity stored in the session after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum SessionPrincipal {
    Admin(i32),
    User(i32),
    Driver(i32),
}

impl fmt::Display for SessionPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin(id) => write!(f, "admin {}", id),
            Self::User(id) => write!(f, "user {}", id),
            Self::Driver(id) => write!(f, "driver {}", id),
        }
    }
}

/// Account resolved for the current request by `AuthGuard`.
#[derive(Debug, Clone, PartialEq)]
pub enum Account {
    Admin(Admin),
    User(User),
    Driver(Driver),
}

impl Account {
    pub fn principal(&self) -> SessionPrincipal {
        match self {
            Self::Admin(admin) => SessionPrincipal::Admin(admin.id),
            Self::User(user) => SessionPrincipal::User(user.id),
            Self::Driver(driver) => SessionPrincipal::Driver(driver.id),
        }
    }

    /// Balance-holding reference, `None` for admins.
    pub fn account_ref(&self) -> Option<AccountRef> {
        match self {
            Self::Admin(_) => None,
            Self::User(user) => Some(AccountRef::User(user.id)),
            Self::Driver(driver) => Some(AccountRef::Driver(driver.id)),
        }
    }

    pub fn into_dto(self) -> AccountDto {
        match self {
            Self::Admin(admin) => AccountDto::Admin(admin.into_dto()),
            Self::User(user) => AccountDto::User(user.into_dto()),
            Self::Driver(driver) => AccountDto::Driver(driver.into_dto()),
        }
    }
}

/// Passenger account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub phone: String,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: String,
    /// Balance in minor currency units.
    pub balance: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            phone: self.phone,
            name: self.name,
            email: self.email,
            balance: from_minor(self.balance),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            phone: entity.phone,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            balance: entity.balance,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}

/// Driver account with vehicle details and commission settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i32,
    pub phone: String,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub car_brand: String,
    pub car_model: String,
    pub car_color: String,
    pub car_number: String,
    pub status: DriverStatus,
    pub is_active: bool,
    pub is_online: bool,
    /// Balance in minor currency units.
    pub balance: i64,
    /// Commission rate in basis points.
    pub commission_rate_bp: i32,
    pub total_orders: i32,
    pub created_at: DateTime<Utc>,
}

impl Driver {
    /// Only approved, active drivers may accept orders.
    pub fn can_accept_orders(&self) -> bool {
        self.status == DriverStatus::Approved && self.is_active
    }

    pub fn into_dto(self) -> DriverDto {
        DriverDto {
            id: self.id,
            phone: self.phone,
            name: self.name,
            email: self.email,
            car_brand: self.car_brand,
            car_model: self.car_model,
            car_color: self.car_color,
            car_number: self.car_number,
            status: self.status,
            is_active: self.is_active,
            is_online: self.is_online,
            balance: from_minor(self.balance),
            commission_rate: rate_from_bp(self.commission_rate_bp),
            total_orders: self.total_orders,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::driver::Model) -> Self {
        Self {
            id: entity.id,
            phone: entity.phone,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            car_brand: entity.car_brand,
            car_model: entity.car_model,
            car_color: entity.car_color,
            car_number: entity.car_number,
            status: DriverStatus::parse(&entity.status).unwrap_or(DriverStatus::Pending),
            is_active: entity.is_active,
            is_online: entity.is_online,
            balance: entity.balance,
            commission_rate_bp: entity.commission_rate_bp,
            total_orders: entity.total_orders,
            created_at: entity.created_at,
        }
    }
}

/// Back-office account.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Admin {
    pub fn into_dto(self) -> AdminDto {
        AdminDto {
            id: self.id,
            email: self.email,
            name: self.name,
            last_login_at: self.last_login_at,
        }
    }

    pub fn from_entity(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
            is_active: entity.is_active,
            last_login_at: entity.last_login_at,
        }
    }
}

fn validated_password(password: &str) -> Result<String, AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation(
            "password",
            format!("password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }

    Ok(hash_password(password))
}

/// Parameters for registering a passenger. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub phone: String,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: String,
}

impl CreateUserParam {
    /// Validates the registration body and hashes the password.
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        Ok(Self {
            phone: required_text("phone", Some(dto.phone))?,
            name: required_text("name", Some(dto.name))?,
            email: optional_text(dto.email),
            password_hash: validated_password(&dto.password)?,
        })
    }
}

/// Parameters for registering a driver. New drivers start pending and inactive.
#[derive(Debug, Clone)]
pub struct CreateDriverParam {
    pub phone: String,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub car_brand: String,
    pub car_model: String,
    pub car_color: String,
    pub car_number: String,
}

impl CreateDriverParam {
    pub fn from_dto(dto: RegisterDriverDto) -> Result<Self, AppError> {
        Ok(Self {
            phone: required_text("phone", Some(dto.phone))?,
            name: required_text("name", Some(dto.name))?,
            email: optional_text(dto.email),
            password_hash: validated_password(&dto.password)?,
            car_brand: dto.car_brand.trim().to_string(),
            car_model: dto.car_model.trim().to_string(),
            car_color: dto.car_color.trim().to_string(),
            car_number: dto.car_number.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateAdminParam {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// Admin changes to a driver. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateDriverParam {
    pub driver_id: i32,
    pub status: Option<DriverStatus>,
    pub commission_rate_bp: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateDriverParam {
    pub fn from_dto(driver_id: i32, dto: UpdateDriverDto) -> Result<Self, AppError> {
        Ok(Self {
            driver_id,
            status: dto.status,
            commission_rate_bp: dto.commission_rate.map(rate_to_bp).transpose()?,
            is_active: dto.is_active,
        })
    }
}
