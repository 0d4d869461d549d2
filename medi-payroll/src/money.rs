//! Decimal helpers for hours and money
//!
//! Values are stored as `f64`; all arithmetic goes through `Decimal` and is
//! rounded back to 2 decimal places (half away from zero). Inputs that do
//! not fit a `Decimal` and results that overflow are rejected, never
//! clamped to zero.

use crate::error::{PayrollError, PayrollResult};
use rust_decimal::prelude::*;

/// Rounding strategy for stored values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Round to 2 decimal places
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2(value).to_f64().unwrap_or_default()
}

/// Reject NaN, infinities, negative values and values beyond `Decimal` range
pub fn require_non_negative(value: f64, field: &'static str) -> PayrollResult<Decimal> {
    if !value.is_finite() || value < 0.0 {
        return Err(PayrollError::InvalidAmount { field, value });
    }
    Decimal::from_f64(value).ok_or(PayrollError::InvalidAmount { field, value })
}

/// `a + b`; overflow is reported against `field` / `value`
pub fn checked_add(
    a: Decimal,
    b: Decimal,
    field: &'static str,
    value: f64,
) -> PayrollResult<Decimal> {
    a.checked_add(b)
        .ok_or(PayrollError::InvalidAmount { field, value })
}

/// `a × b`; overflow is reported against `field` / `value`
pub fn checked_mul(
    a: Decimal,
    b: Decimal,
    field: &'static str,
    value: f64,
) -> PayrollResult<Decimal> {
    a.checked_mul(b)
        .ok_or(PayrollError::InvalidAmount { field, value })
}
