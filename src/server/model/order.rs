//! Order domain models and parameters.
//!
//! Orders move through the status lookup: created → accepted → in progress → completed,
//! with cancelled reachable from any non-terminal state. Monetary fields are minor units.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::PaginatedDto,
        order::{CreateOrderDto, OrderDto, PaymentType, UpdateOrderDto},
    },
    server::{
        error::AppError,
        model::account::Account,
        util::{
            money::{from_minor, to_minor},
            validate::{optional_text, required_text},
        },
    },
};

/// Transfer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
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
    pub price: i64,
    pub commission_amount: Option<i64>,
    pub driver_amount: Option<i64>,
    pub payment_type: PaymentType,
    pub payment_from_balance: bool,
    pub prepay_amount: i64,
    pub payment_url: Option<String>,
    pub payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Whether the passenger still owes an online payment for this order.
    pub fn requires_online_payment(&self) -> bool {
        !self.payment_from_balance
            && matches!(self.payment_type, PaymentType::Full | PaymentType::Prepay)
    }

    /// Amount charged online: the prepay share for prepay orders, the full price otherwise.
    pub fn online_payment_amount(&self) -> i64 {
        match self.payment_type {
            PaymentType::Prepay => self.prepay_amount,
            _ => self.price,
        }
    }

    /// Whether `actor` may view this order: its owner, its driver or any admin.
    pub fn visible_to(&self, actor: &Account) -> bool {
        match actor {
            Account::Admin(_) => true,
            Account::User(user) => user.id == self.user_id,
            Account::Driver(driver) => self.driver_id == Some(driver.id),
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            driver_id: self.driver_id,
            status_id: self.status_id,
            from_location: self.from_location,
            to_location: self.to_location,
            pickup_at: self.pickup_at,
            flight_number: self.flight_number,
            passenger_name: self.passenger_name,
            passenger_phone: self.passenger_phone,
            passenger_email: self.passenger_email,
            passengers_count: self.passengers_count,
            luggage_count: self.luggage_count,
            transfer_type: self.transfer_type,
            car_class: self.car_class,
            notes: self.notes,
            price: from_minor(self.price),
            commission_amount: self.commission_amount.map(from_minor),
            driver_amount: self.driver_amount.map(from_minor),
            payment_type: self.payment_type,
            payment_from_balance: self.payment_from_balance,
            prepay_amount: from_minor(self.prepay_amount),
            payment_url: self.payment_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            driver_id: entity.driver_id,
            status_id: entity.status_id,
            from_location: entity.from_location,
            to_location: entity.to_location,
            pickup_at: entity.pickup_at,
            flight_number: entity.flight_number,
            passenger_name: entity.passenger_name,
            passenger_phone: entity.passenger_phone,
            passenger_email: entity.passenger_email,
            passengers_count: entity.passengers_count,
            luggage_count: entity.luggage_count,
            transfer_type: entity.transfer_type,
            car_class: entity.car_class,
            notes: entity.notes,
            price: entity.price,
            commission_amount: entity.commission_amount,
            driver_amount: entity.driver_amount,
            payment_type: PaymentType::parse(&entity.payment_type).unwrap_or_default(),
            payment_from_balance: entity.payment_from_balance,
            prepay_amount: entity.prepay_amount,
            payment_url: entity.payment_url,
            payment_id: entity.payment_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Validated booking request.
#[derive(Debug, Clone)]
pub struct PlaceOrderParam {
    pub user_id: i32,
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
    /// Price in minor units, 0 when the passenger left it to the operator.
    pub price: i64,
    pub payment_type: PaymentType,
    pub payment_from_balance: bool,
}

impl PlaceOrderParam {
    /// Validates a booking request placed by `user_id`.
    ///
    /// # Returns
    /// - `Ok(PlaceOrderParam)` - All required fields present and numbers in range
    /// - `Err(AppError::Validation)` - A required field is missing or a number is invalid,
    ///   with the field named
    pub fn from_dto(user_id: i32, dto: CreateOrderDto) -> Result<Self, AppError> {
        let from_location = required_text("from_location", dto.from_location)?;
        let to_location = required_text("to_location", dto.to_location)?;
        let passenger_name = required_text("passenger_name", dto.passenger_name)?;
        let passenger_phone = required_text("passenger_phone", dto.passenger_phone)?;
        let pickup_at = dto
            .pickup_at
            .ok_or_else(|| AppError::validation("pickup_at", "pickup_at is required"))?;

        let passengers_count = dto.passengers_count.unwrap_or(1);
        if passengers_count < 1 {
            return Err(AppError::validation(
                "passengers_count",
                "passengers_count must be at least 1",
            ));
        }
        let luggage_count = dto.luggage_count.unwrap_or(0);
        if luggage_count < 0 {
            return Err(AppError::validation(
                "luggage_count",
                "luggage_count must not be negative",
            ));
        }

        let price = match dto.price {
            Some(price) => to_minor("price", price)?,
            None => 0,
        };

        Ok(Self {
            user_id,
            from_location,
            to_location,
            pickup_at,
            flight_number: optional_text(dto.flight_number),
            passenger_name,
            passenger_phone,
            passenger_email: optional_text(dto.passenger_email),
            passengers_count,
            luggage_count,
            transfer_type: optional_text(dto.transfer_type),
            car_class: optional_text(dto.car_class),
            notes: optional_text(dto.notes),
            price,
            payment_type: dto.payment_type,
            payment_from_balance: dto.payment_from_balance,
        })
    }
}

/// Driver assignment written by the accept operation.
#[derive(Debug, Clone)]
pub struct AssignDriverParam {
    pub order_id: i32,
    pub driver_id: i32,
    /// Price the commission was computed from; the update only applies while it is unchanged.
    pub price: i64,
    pub commission_amount: i64,
    pub driver_amount: i64,
}

/// Admin update of an order.
#[derive(Debug, Clone)]
pub struct UpdateOrderParam {
    pub order_id: i32,
    pub status_id: i32,
    pub price: Option<i64>,
    pub notes: Option<String>,
}

impl UpdateOrderParam {
    pub fn from_dto(order_id: i32, dto: UpdateOrderDto) -> Result<Self, AppError> {
        Ok(Self {
            order_id,
            status_id: dto.status_id,
            price: dto.price.map(|p| to_minor("price", p)).transpose()?,
            notes: dto.notes,
        })
    }
}

/// Admin update as written to the database.
///
/// Applies only while the order still has `expected_status_id` and `expected_price`.
#[derive(Debug, Clone)]
pub struct ApplyOrderUpdateParam {
    pub order_id: i32,
    pub expected_status_id: i32,
    pub expected_price: i64,
    pub status_id: i32,
    pub price: Option<i64>,
    /// `(commission_amount, driver_amount)` recomputed for the new price of an assigned order.
    pub split: Option<(i64, i64)>,
    pub notes: Option<String>,
}

/// Page of orders with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrders {
    pub fn into_dto(self) -> PaginatedDto<OrderDto> {
        PaginatedDto {
            items: self.orders.into_iter().map(Order::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
