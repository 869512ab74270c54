//! Money arithmetic
//!
//! Amounts are stored and serialized as f64 but never summed as f64:
//! all accumulation goes through `Decimal` and is rounded back to two
//! places on the way out, so 0.1 + 0.2 is exactly 0.3.

use rust_decimal::prelude::*;

/// Currency precision (two decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Stored f64 amount -> Decimal. Non-finite input collapses to zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Decimal -> presentation f64, rounded half-away-from-zero to cents
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum stored amounts without floating point drift
pub fn sum_amounts(amounts: &[f64]) -> f64 {
    let total: Decimal = amounts.iter().map(|a| to_decimal(*a)).sum();
    to_f64(total)
}
