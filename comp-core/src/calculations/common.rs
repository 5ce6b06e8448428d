//! Rounding helpers shared by the calculators.
//!
//! Every rate product is computed exactly as a [`Decimal`] and converted to
//! whole yen in one place, so the rounding rule for each figure is visible
//! at the call site.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts an integral decimal to yen, saturating at the `i64` range.
fn to_yen(value: Decimal) -> i64 {
    value.to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Truncates toward negative infinity to whole yen.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use comp_core::calculations::common::floor_yen;
///
/// assert_eq!(floor_yen(dec!(1264109.289)), 1_264_109);
/// assert_eq!(floor_yen(dec!(-0.5)), -1);
/// ```
pub fn floor_yen(value: Decimal) -> i64 {
    to_yen(value.floor())
}

/// Rounds to whole yen, halves away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use comp_core::calculations::common::round_half_up_yen;
///
/// assert_eq!(round_half_up_yen(dec!(17456.4999)), 17_456);
/// assert_eq!(round_half_up_yen(dec!(17456.5)), 17_457);
/// ```
pub fn round_half_up_yen(value: Decimal) -> i64 {
    to_yen(value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// `floor(amount × rate)`.
pub fn floor_rate(
    amount: i64,
    rate: Decimal,
) -> i64 {
    floor_yen(Decimal::from(amount) * rate)
}

/// `floor(max(0, amount) × rate)`; a non-positive base is never taxed.
pub fn floor_rate_non_negative(
    amount: i64,
    rate: Decimal,
) -> i64 {
    floor_rate(amount.max(0), rate)
}

/// Floors `amount` to a multiple of `unit`.
///
/// `unit` must be positive; negative amounts floor away from zero.
pub fn floor_to_unit(
    amount: i64,
    unit: i64,
) -> i64 {
    amount.div_euclid(unit) * unit
}
