//! Shared helpers for worksheet arithmetic.
//!
//! Every worksheet line is rounded to whole cents as it is produced, and
//! several lines are floored at zero. Both conventions live here so the
//! worksheets agree on them.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Midpoints round away from zero, so 0.005 becomes 0.01 and -0.005 becomes
/// -0.01.
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use aucalc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(123.456)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Floors a decimal value at zero.
///
/// Worksheet lines that cannot go negative (taxable income, tax payable,
/// offset amounts) are clamped with this after rounding.
///
/// # Arguments
///
/// * `value` - The decimal value to clamp
///
/// # Returns
///
/// The value itself when positive, otherwise zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use aucalc_core::calculations::common::clamp_non_negative;
///
/// assert_eq!(clamp_non_negative(dec!(150.00)), dec!(150.00));
/// assert_eq!(clamp_non_negative(dec!(0.00)), dec!(0.00));
/// assert_eq!(clamp_non_negative(dec!(-150.00)), dec!(0.00));
/// ```
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}
