//! Conversions between API decimals and stored minor units.
//!
//! Balances and prices are stored as integer kopecks so that conditional balance
//! updates in SQL are exact. The API speaks two-decimal amounts.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::server::error::AppError;

/// Share of the price paid upfront for `prepay` orders.
const PREPAY_SHARE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Converts stored minor units to a two-decimal amount.
pub fn from_minor(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

/// Converts a two-decimal amount to minor units.
///
/// # Returns
/// - `Ok(i64)` - Amount in minor units
/// - `Err(AppError::Validation)` - Amount is negative, has more than two decimal places
///   or does not fit
pub fn to_minor(field: &str, amount: Decimal) -> Result<i64, AppError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AppError::validation(field, format!("{} must not be negative", field)));
    }
    if amount.normalize().scale() > 2 {
        return Err(AppError::validation(
            field,
            format!("{} must have at most two decimal places", field),
        ));
    }

    (amount * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| AppError::validation(field, format!("{} is out of range", field)))
}

/// Upfront amount for a prepay order: 30% of the price rounded to whole currency units,
/// ties to even.
pub fn prepay_amount(price: i64) -> i64 {
    let prepay = (from_minor(price) * PREPAY_SHARE)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);

    (prepay * Decimal::ONE_HUNDRED).to_i64().unwrap_or(0)
}

/// Commission withheld from `price` at `rate_bp` basis points, rounded to kopecks.
///
/// # Returns
/// - `(commission, driver_amount)` in minor units, summing to `price`
pub fn split_commission(price: i64, rate_bp: i32) -> (i64, i64) {
    let commission = (from_minor(price) * rate_from_bp(rate_bp) / Decimal::ONE_HUNDRED)
        .round_dp(2);
    let commission = (commission * Decimal::ONE_HUNDRED).to_i64().unwrap_or(0);

    (commission, price - commission)
}

/// Basis points to a percentage (1500 → 15.00).
pub fn rate_from_bp(rate_bp: i32) -> Decimal {
    Decimal::new(rate_bp as i64, 2)
}

/// Percentage to basis points, validated to 0..=100 with two decimals.
pub fn rate_to_bp(rate: Decimal) -> Result<i32, AppError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED || rate.normalize().scale() > 2 {
        return Err(AppError::validation(
            "commission_rate",
            "commission_rate must be between 0 and 100 with at most two decimals",
        ));
    }

    (rate * Decimal::ONE_HUNDRED)
        .to_i32()
        .ok_or_else(|| AppError::validation("commission_rate", "commission_rate is out of range"))
}
