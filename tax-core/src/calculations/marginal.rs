//! Finite-difference marginal tax rate.
//!
//! Bracket tables are piecewise linear, so the true marginal rate depends on
//! which side of a boundary an income sits. Evaluating the tax at `income`
//! and at `income + increment` gives a rate that is stable and reproducible
//! even exactly on a boundary.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::error::TaxError;

/// Step used when the caller does not choose one.
pub const DEFAULT_MARGINAL_INCREMENT: Decimal = Decimal::ONE_THOUSAND;

/// Estimates the marginal rate, in percent, of `tax_fn` at `taxable_income`.
///
/// Computes `(tax_fn(income + increment) − tax_fn(income)) / increment × 100`
/// rounded to two decimal places. `tax_fn` decides what "tax" means: federal
/// tax alone, or federal + cantonal + communal.
///
/// A taxable income of zero or less yields `0` without calling `tax_fn`.
///
/// # Errors
///
/// - [`TaxError::InvalidConfig`] if `increment` is not positive
/// - [`TaxError::AmountOutOfRange`] if `income + increment` or the rate
///   overflows decimal arithmetic
/// - any error returned by `tax_fn`
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::estimate_marginal_rate;
///
/// // A flat 12% tax.
/// let rate = estimate_marginal_rate(
///     dec!(50000),
///     |income: Decimal| Ok(income * dec!(0.12)),
///     dec!(1000),
/// )
/// .unwrap();
///
/// assert_eq!(rate, dec!(12.00));
/// ```
pub fn estimate_marginal_rate<F>(
    taxable_income: Decimal,
    tax_fn: F,
    increment: Decimal,
) -> Result<Decimal, TaxError>
where
    F: Fn(Decimal) -> Result<Decimal, TaxError>,
{
    if increment <= Decimal::ZERO {
        return Err(TaxError::InvalidConfig(format!(
            "marginal increment must be positive, got {increment}"
        )));
    }
    if taxable_income <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let stepped = taxable_income
        .checked_add(increment)
        .ok_or(TaxError::AmountOutOfRange {
            field: "taxable_income",
            value: taxable_income,
        })?;
    let at_income = tax_fn(taxable_income)?;
    let above = tax_fn(stepped)?;

    let rate = above
        .checked_sub(at_income)
        .and_then(|delta| delta.checked_div(increment))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(TaxError::AmountOutOfRange {
            field: "marginal_rate",
            value: above,
        })?;
    Ok(round_half_up(rate))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use proptest::prelude::{prop_assert, proptest};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::brackets::{compute_bracket_tax, top_rate};
    use crate::models::Bracket;

    fn table() -> Vec<Bracket> {
        vec![
            Bracket::tranche(dec!(0), Some(dec!(14500)), dec!(0)),
            Bracket::tranche(dec!(14500), Some(dec!(31600)), dec!(0.77)),
            Bracket::tranche(dec!(31600), Some(dec!(41400)), dec!(0.88)),
            Bracket::tranche(dec!(41400), Some(dec!(55200)), dec!(2.64)),
            Bracket::tranche(dec!(55200), Some(dec!(72500)), dec!(2.97)),
            Bracket::tranche(dec!(72500), None, dec!(5.94)),
        ]
    }

    #[test]
    fn zero_income_skips_tax_fn() {
        let calls = Cell::new(0);

        let rate = estimate_marginal_rate(
            dec!(0),
            |income| {
                calls.set(calls.get() + 1);
                Ok(income)
            },
            DEFAULT_MARGINAL_INCREMENT,
        );

        assert_eq!(rate, Ok(dec!(0)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn negative_income_yields_zero() {
        let rate = estimate_marginal_rate(dec!(-500), |_| Ok(dec!(1)), dec!(1000));

        assert_eq!(rate, Ok(dec!(0)));
    }

    #[test]
    fn inside_bracket_returns_bracket_rate() {
        let t = table();

        let rate =
            estimate_marginal_rate(dec!(60000), |x| compute_bracket_tax(x, &t), dec!(1000));

        assert_eq!(rate, Ok(dec!(2.97)));
    }

    #[test]
    fn straddling_boundary_blends_rates() {
        let t = table();

        // 500 at 2.97% and 500 at 5.94% over a 1,000 step.
        let rate =
            estimate_marginal_rate(dec!(72000), |x| compute_bracket_tax(x, &t), dec!(1000));

        assert_eq!(rate, Ok(dec!(4.46)));
    }

    #[test]
    fn exactly_on_boundary_uses_upper_side() {
        let t = table();

        let rate =
            estimate_marginal_rate(dec!(72500), |x| compute_bracket_tax(x, &t), dec!(1000));

        assert_eq!(rate, Ok(dec!(5.94)));
    }

    #[test]
    fn rejects_non_positive_increment() {
        let rate = estimate_marginal_rate(dec!(50000), Ok, dec!(0));

        assert!(matches!(rate, Err(TaxError::InvalidConfig(_))));
    }

    #[test]
    fn propagates_tax_fn_error() {
        let rate = estimate_marginal_rate(
            dec!(50000),
            |_| Err(TaxError::UnknownCanton("XX".to_string())),
            dec!(1000),
        );

        assert_eq!(rate, Err(TaxError::UnknownCanton("XX".to_string())));
    }

    #[test]
    fn income_at_decimal_limit_is_out_of_range() {
        let rate = estimate_marginal_rate(Decimal::MAX, Ok, dec!(1000));

        assert_eq!(
            rate,
            Err(TaxError::AmountOutOfRange {
                field: "taxable_income",
                value: Decimal::MAX,
            })
        );
    }

    #[test]
    fn overflowing_rate_is_out_of_range() {
        let rate = estimate_marginal_rate(
            dec!(1),
            |income| Ok(if income > dec!(1) { Decimal::MAX } else { dec!(0) }),
            dec!(1),
        );

        assert_eq!(
            rate,
            Err(TaxError::AmountOutOfRange {
                field: "marginal_rate",
                value: Decimal::MAX,
            })
        );
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_rate_is_non_negative_and_bounded(income in 0u32..500_000) {
            let t = table();
            let ceiling = top_rate(&t).unwrap_or_default() + dec!(0.01);

            let rate = estimate_marginal_rate(
                Decimal::from(income),
                |x| compute_bracket_tax(x, &t),
                DEFAULT_MARGINAL_INCREMENT,
            )
            .unwrap();

            prop_assert!(rate >= Decimal::ZERO);
            prop_assert!(rate <= ceiling, "rate {rate} above {ceiling}");
        }
    }
}
