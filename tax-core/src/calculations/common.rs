//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across the bracket,
//! deduction and wealth calculations: rounding and percentage arithmetic.

use rust_decimal::Decimal;

/// Largest amount a taxpayer profile may declare: one quadrillion francs.
///
/// Every sum and product the engine forms from amounts up to this bound
/// stays well inside [`Decimal`]'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Two places are centimes, the smallest unit of the franc. Values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `rate` percent of `amount`, unrounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(85000), dec!(5.3)), dec!(4505));
/// assert_eq!(percent_of(dec!(1000), dec!(0.77)), dec!(7.7));
/// ```
pub fn percent_of(
    amount: Decimal,
    rate: Decimal,
) -> Decimal {
    amount * rate / Decimal::ONE_HUNDRED
}

/// Like [`percent_of`], but `None` when the product overflows.
pub fn checked_percent_of(
    amount: Decimal,
    rate: Decimal,
) -> Option<Decimal> {
    amount
        .checked_mul(rate)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
}

/// Applies a multiplier expressed in percent and rounds to centimes.
///
/// Used for the cantonal and communal multipliers on the simple tax.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::apply_multiplier;
///
/// assert_eq!(apply_multiplier(dec!(3561.00), dec!(119)), dec!(4237.59));
/// assert_eq!(apply_multiplier(dec!(3561.00), dec!(100)), dec!(3561.00));
/// ```
pub fn apply_multiplier(
    simple_tax: Decimal,
    multiplier: Decimal,
) -> Decimal {
    round_half_up(percent_of(simple_tax, multiplier))
}

/// Clamps `value` into `[minimum, maximum]`.
///
/// Unlike [`Decimal::clamp`] this never panics: if the bounds are inverted
/// the maximum wins, which is how the rate tables read when a canton sets a
/// fixed amount by giving equal bounds.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::clamp;
///
/// assert_eq!(clamp(dec!(1500), dec!(2000), dec!(4000)), dec!(2000));
/// assert_eq!(clamp(dec!(2550), dec!(2000), dec!(4000)), dec!(2550));
/// assert_eq!(clamp(dec!(9000), dec!(2000), dec!(4000)), dec!(4000));
/// ```
pub fn clamp(
    value: Decimal,
    minimum: Decimal,
    maximum: Decimal,
) -> Decimal {
    value.max(minimum).min(maximum)
}
