mod admin;
mod driver;
mod funds_request;
mod order;
mod order_status;
mod rideshare_booking;
mod user;
