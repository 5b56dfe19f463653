//! Rideshare and seat booking domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::rideshare::{
        BookSeatsDto, BookingDto, BookingStatus, CreateRideshareDto, RideshareDto,
        RideshareStatus,
    },
    server::{
        error::AppError,
        util::{
            money::{from_minor, to_minor},
            validate::{optional_text, required_text},
        },
    },
};

/// Largest number of seats a rideshare can offer.
pub const MAX_RIDESHARE_SEATS: i32 = 8;

/// Shared ride with a seat inventory.
///
/// `0 <= seats_available <= seats_total`; confirmed booking seats plus
/// `seats_available` equal `seats_total`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rideshare {
    pub id: i32,
    pub route_from: String,
    pub route_to: String,
    pub departure_at: DateTime<Utc>,
    pub seats_total: i32,
    pub seats_available: i32,
    pub price_per_seat: i64,
    pub car_class: Option<String>,
    pub notes: Option<String>,
    pub created_by_name: String,
    pub created_by_phone: String,
    pub status: RideshareStatus,
    pub created_at: DateTime<Utc>,
}

impl Rideshare {
    /// Organizer phone is not exposed.
    pub fn into_dto(self) -> RideshareDto {
        RideshareDto {
            id: self.id,
            route_from: self.route_from,
            route_to: self.route_to,
            departure_at: self.departure_at,
            seats_total: self.seats_total,
            seats_available: self.seats_available,
            price_per_seat: from_minor(self.price_per_seat),
            car_class: self.car_class,
            notes: self.notes,
            created_by_name: self.created_by_name,
            status: self.status,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::rideshare::Model) -> Self {
        Self {
            id: entity.id,
            route_from: entity.route_from,
            route_to: entity.route_to,
            departure_at: entity.departure_at,
            seats_total: entity.seats_total,
            seats_available: entity.seats_available,
            price_per_seat: entity.price_per_seat,
            car_class: entity.car_class,
            notes: entity.notes,
            created_by_name: entity.created_by_name,
            created_by_phone: entity.created_by_phone,
            status: RideshareStatus::parse(&entity.status).unwrap_or(RideshareStatus::Cancelled),
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub rideshare_id: i32,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub passenger_email: Option<String>,
    pub seats_count: i32,
    pub status: BookingStatus,
    pub cancel_token: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            rideshare_id: self.rideshare_id,
            passenger_name: self.passenger_name,
            passenger_phone: self.passenger_phone,
            passenger_email: self.passenger_email,
            seats_count: self.seats_count,
            status: self.status,
            cancel_token: self.cancel_token,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::rideshare_booking::Model) -> Self {
        Self {
            id: entity.id,
            rideshare_id: entity.rideshare_id,
            passenger_name: entity.passenger_name,
            passenger_phone: entity.passenger_phone,
            passenger_email: entity.passenger_email,
            seats_count: entity.seats_count,
            status: BookingStatus::parse(&entity.status).unwrap_or(BookingStatus::Cancelled),
            cancel_token: entity.cancel_token,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRideshareParam {
    pub route_from: String,
    pub route_to: String,
    pub departure_at: DateTime<Utc>,
    pub seats_total: i32,
    pub price_per_seat: i64,
    pub car_class: Option<String>,
    pub notes: Option<String>,
    pub created_by_name: String,
    pub created_by_phone: String,
}

impl CreateRideshareParam {
    /// Validates the request; `seats_total` must be within 1..=8.
    pub fn from_dto(dto: CreateRideshareDto) -> Result<Self, AppError> {
        let route_from = required_text("route_from", dto.route_from)?;
        let route_to = required_text("route_to", dto.route_to)?;
        let departure_at = dto
            .departure_at
            .ok_or_else(|| AppError::validation("departure_at", "departure_at is required"))?;
        let created_by_name = required_text("created_by_name", dto.created_by_name)?;
        let created_by_phone = required_text("created_by_phone", dto.created_by_phone)?;

        let seats_total = dto
            .seats_total
            .ok_or_else(|| AppError::validation("seats_total", "seats_total is required"))?;
        if !(1..=MAX_RIDESHARE_SEATS).contains(&seats_total) {
            return Err(AppError::validation(
                "seats_total",
                format!("seats_total must be between 1 and {}", MAX_RIDESHARE_SEATS),
            ));
        }

        let price_per_seat = match dto.price_per_seat {
            Some(price) => to_minor("price_per_seat", price)?,
            None => 0,
        };

        Ok(Self {
            route_from,
            route_to,
            departure_at,
            seats_total,
            price_per_seat,
            car_class: optional_text(dto.car_class),
            notes: optional_text(dto.notes),
            created_by_name,
            created_by_phone,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BookSeatsParam {
    pub rideshare_id: i32,
    pub seats_count: i32,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub passenger_email: Option<String>,
}

impl BookSeatsParam {
    pub fn from_dto(rideshare_id: i32, dto: BookSeatsDto) -> Result<Self, AppError> {
        if dto.seats_count <= 0 {
            return Err(AppError::validation(
                "seats_count",
                "seats_count must be greater than zero",
            ));
        }

        Ok(Self {
            rideshare_id,
            seats_count: dto.seats_count,
            passenger_name: required_text("passenger_name", dto.passenger_name)?,
            passenger_phone: required_text("passenger_phone", dto.passenger_phone)?,
            passenger_email: optional_text(dto.passenger_email),
        })
    }
}

/// Booking row to insert once seats are reserved.
#[derive(Debug, Clone)]
pub struct NewBookingParam {
    pub booking: BookSeatsParam,
    pub cancel_token: String,
}
