//! Notification texts for workflow events.

use super::Notification;
use crate::server::{
    model::{
        account::{AccountRef, Driver},
        funds::{FundsRequest, FundsRequestKind},
        order::Order,
        rideshare::{Booking, Rideshare},
    },
    util::money::from_minor,
};

const PICKUP_FORMAT: &str = "%d.%m.%Y %H:%M UTC";

/// Staff alert plus passenger confirmation email for a new order.
pub fn order_placed(order: &Order) -> Notification {
    let mut body = format!(
        "{} → {}\nPickup: {}\nPassenger: {} {}\nPassengers: {}, luggage: {}\nPrice: {} ({})",
        order.from_location,
        order.to_location,
        order.pickup_at.format(PICKUP_FORMAT),
        order.passenger_name,
        order.passenger_phone,
        order.passengers_count,
        order.luggage_count,
        from_minor(order.price),
        order.payment_type.as_str(),
    );
    if let Some(flight) = &order.flight_number {
        body.push_str(&format!("\nFlight: {}", flight));
    }
    if order.payment_from_balance {
        body.push_str("\nPaid from balance");
    }

    Notification::new(format!("New order #{}", order.id), body)
        .to_staff()
        .to_email(order.passenger_email.clone())
}

/// Push to the passenger once a driver takes the order.
pub fn order_accepted(order: &Order, driver: &Driver) -> Notification {
    Notification::new(
        format!("Order #{} accepted", order.id),
        format!(
            "Driver {} ({} {}, {}) will pick you up at {}",
            driver.name,
            driver.car_brand,
            driver.car_model,
            driver.car_number,
            order.pickup_at.format(PICKUP_FORMAT)
        ),
    )
    .to_staff()
    .to_account(AccountRef::User(order.user_id))
}

pub fn order_cancelled(order: &Order, refunded: Option<i64>) -> Notification {
    let mut body = format!("{} → {}", order.from_location, order.to_location);
    if let Some(amount) = refunded {
        body.push_str(&format!("\nRefunded to balance: {}", from_minor(amount)));
    }

    Notification::new(format!("Order #{} cancelled", order.id), body)
        .to_staff()
        .to_account(AccountRef::User(order.user_id))
}

pub fn order_status_changed(order: &Order, status_name: &str) -> Notification {
    Notification::new(
        format!("Order #{}", order.id),
        format!("Status changed to \"{}\"", status_name),
    )
    .to_account(AccountRef::User(order.user_id))
}

pub fn driver_registered(driver: &Driver) -> Notification {
    Notification::new(
        "New driver registration",
        format!(
            "{} {}\n{} {} {}, {}",
            driver.name,
            driver.phone,
            driver.car_brand,
            driver.car_model,
            driver.car_color,
            driver.car_number
        ),
    )
    .to_staff()
}

pub fn rideshare_created(rideshare: &Rideshare) -> Notification {
    Notification::new(
        format!("New rideshare #{}", rideshare.id),
        format!(
            "{} → {}\nDeparture: {}\nSeats: {}, price per seat: {}\nOrganizer: {} {}",
            rideshare.route_from,
            rideshare.route_to,
            rideshare.departure_at.format(PICKUP_FORMAT),
            rideshare.seats_total,
            from_minor(rideshare.price_per_seat),
            rideshare.created_by_name,
            rideshare.created_by_phone
        ),
    )
    .to_staff()
}

/// Staff alert plus an email to the passenger carrying the cancellation token.
pub fn seats_booked(rideshare: &Rideshare, booking: &Booking) -> Notification {
    Notification::new(
        format!("Booking on rideshare #{}", rideshare.id),
        format!(
            "{} → {}, {}\nPassenger: {} {}\nSeats: {}, left: {}\nCancellation code: {}",
            rideshare.route_from,
            rideshare.route_to,
            rideshare.departure_at.format(PICKUP_FORMAT),
            booking.passenger_name,
            booking.passenger_phone,
            booking.seats_count,
            rideshare.seats_available,
            booking.cancel_token
        ),
    )
    .to_staff()
    .to_email(booking.passenger_email.clone())
}

pub fn booking_cancelled(booking: &Booking) -> Notification {
    Notification::new(
        format!("Booking #{} cancelled", booking.id),
        format!(
            "Rideshare #{}: {} seat(s) released by {} {}",
            booking.rideshare_id,
            booking.seats_count,
            booking.passenger_name,
            booking.passenger_phone
        ),
    )
    .to_staff()
}

pub fn funds_requested(request: &FundsRequest) -> Notification {
    let label = match request.kind {
        FundsRequestKind::Withdrawal => "Withdrawal",
        FundsRequestKind::Deposit => "Deposit",
    };

    Notification::new(
        format!("{} request #{}", label, request.id),
        format!(
            "{}: {}\n{}",
            request.account,
            from_minor(request.amount),
            request.details
        ),
    )
    .to_staff()
}
