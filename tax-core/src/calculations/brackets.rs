//! Progressive bracket tax.
//!
//! A bracket table is an ascending list of [`Bracket`]s covering `[0, ∞)`
//! without gaps or overlaps. Two encodings coexist in the rate tables:
//!
//! | Encoding        | Stored per bracket    | Tax for `amount`                                 |
//! |-----------------|-----------------------|--------------------------------------------------|
//! | Tranche         | `from`, `to`, `rate`  | Σ `(min(amount, to) − from) × rate`, lower ones  |
//! | Cumulative base | the same, plus `base` | `base + (amount − from) × rate`, its own bracket |
//!
//! Both give the same tax when the `base` values are correct. The
//! calculator dispatches on which fields are present, so hand-verified
//! `base` columns are used as published rather than recomputed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::Bracket;
//! use tax_core::calculations::compute_bracket_tax;
//!
//! let tranches = [
//!     Bracket::tranche(dec!(0), Some(dec!(10000)), dec!(0)),
//!     Bracket::tranche(dec!(10000), Some(dec!(50000)), dec!(5)),
//!     Bracket::tranche(dec!(50000), None, dec!(10)),
//! ];
//! let cumulative = [
//!     Bracket::cumulative(dec!(0), Some(dec!(10000)), dec!(0), dec!(0)),
//!     Bracket::cumulative(dec!(10000), Some(dec!(50000)), dec!(5), dec!(0)),
//!     Bracket::cumulative(dec!(50000), None, dec!(10), dec!(2000)),
//! ];
//!
//! assert_eq!(compute_bracket_tax(dec!(60000), &tranches).unwrap(), dec!(3000.00));
//! assert_eq!(compute_bracket_tax(dec!(60000), &cumulative).unwrap(), dec!(3000.00));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{checked_percent_of, round_half_up};
use crate::error::{BracketTableError, TaxError};
use crate::models::{Bracket, BracketEncoding};

/// Checks the ordering and coverage invariants of a bracket table and
/// reports which encoding it uses.
///
/// # Errors
///
/// Returns the first [`BracketTableError`] found:
/// - the table is empty or does not start at zero
/// - a bracket is empty, inverted or has a negative rate
/// - two adjacent brackets leave a gap or overlap
/// - a bracket other than the last is unbounded, or the last is bounded
/// - some brackets carry a `base` and others do not
/// - a cumulative table's first base is not zero, or a base decreases
pub fn validate_brackets(brackets: &[Bracket]) -> Result<BracketEncoding, BracketTableError> {
    let first = brackets.first().ok_or(BracketTableError::Empty)?;
    if first.from != Decimal::ZERO {
        return Err(BracketTableError::DoesNotStartAtZero(first.from));
    }
    let encoding = first.encoding();
    if let Some(base) = first.base.filter(|base| !base.is_zero()) {
        return Err(BracketTableError::NonZeroFirstBase(base));
    }

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO {
            return Err(BracketTableError::NegativeRate {
                index,
                rate: bracket.rate,
            });
        }
        if bracket.encoding() != encoding {
            return Err(BracketTableError::MixedEncoding { index });
        }

        match (bracket.to, brackets.get(index + 1)) {
            (Some(to), Some(next)) => {
                match (bracket.base, next.base) {
                    (Some(previous), Some(base)) if base < previous => {
                        return Err(BracketTableError::DecreasingBase {
                            index: index + 1,
                            base,
                            previous,
                        });
                    }
                    _ => {}
                }
                if to <= bracket.from {
                    return Err(BracketTableError::EmptyBracket { index });
                }
                if next.from > to {
                    return Err(BracketTableError::Gap {
                        index,
                        to,
                        next_from: next.from,
                    });
                }
                if next.from < to {
                    return Err(BracketTableError::Overlap {
                        index,
                        to,
                        next_from: next.from,
                    });
                }
            }
            (None, Some(_)) => return Err(BracketTableError::UnboundedBeforeLast { index }),
            (Some(to), None) => return Err(BracketTableError::BoundedLast(to)),
            (None, None) => {}
        }
    }

    Ok(encoding)
}

/// Computes the tax owed on `amount` under `brackets`.
///
/// The table is validated on every call. The result is rounded to centimes
/// once, on the final total; individual brackets are never rounded.
///
/// # Errors
///
/// - [`TaxError::InvalidBracketTable`] if the table breaks an invariant
/// - [`TaxError::NegativeAmount`] if `amount < 0`
/// - [`TaxError::AmountOutOfRange`] if the tax overflows decimal arithmetic
pub fn compute_bracket_tax(
    amount: Decimal,
    brackets: &[Bracket],
) -> Result<Decimal, TaxError> {
    let encoding = validate_brackets(brackets)?;

    if amount < Decimal::ZERO {
        return Err(TaxError::NegativeAmount {
            field: "amount",
            value: amount,
        });
    }
    if amount.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let tax = match encoding {
        BracketEncoding::Tranche => tranche_sum(amount, brackets),
        BracketEncoding::CumulativeBase => cumulative_tax(amount, brackets),
    }
    .ok_or(TaxError::AmountOutOfRange {
        field: "amount",
        value: amount,
    })?;

    Ok(round_half_up(tax))
}

/// Running sum over every tranche the amount reaches. `None` on overflow.
fn tranche_sum(
    amount: Decimal,
    brackets: &[Bracket],
) -> Option<Decimal> {
    brackets
        .iter()
        .take_while(|b| amount > b.from)
        .try_fold(Decimal::ZERO, |sum, b| {
            let upper = b.to.map_or(amount, |to| to.min(amount));
            sum.checked_add(checked_percent_of(upper - b.from, b.rate)?)
        })
}

/// Base plus marginal rate of the single bracket containing `amount`.
/// `None` on overflow.
fn cumulative_tax(
    amount: Decimal,
    brackets: &[Bracket],
) -> Option<Decimal> {
    // A validated table covers [0, ∞), so some bracket always contains amount.
    let Some(bracket) = brackets.iter().find(|b| b.contains(amount)) else {
        return Some(Decimal::ZERO);
    };
    let marginal = checked_percent_of(amount - bracket.from, bracket.rate)?;
    bracket.base.unwrap_or(Decimal::ZERO).checked_add(marginal)
}

/// Tax owed at the lower bound of every bracket, by tranche summation.
///
/// Works on either encoding; any `base` already present is ignored.
///
/// # Errors
///
/// [`BracketTableError`] if the table breaks an invariant.
pub fn derive_bases(brackets: &[Bracket]) -> Result<Vec<Decimal>, BracketTableError> {
    validate_brackets(brackets)?;

    let mut running = Decimal::ZERO;
    let mut bases = Vec::with_capacity(brackets.len());
    for (index, bracket) in brackets.iter().enumerate() {
        bases.push(round_half_up(running));
        if let Some(to) = bracket.to {
            running = checked_percent_of(to - bracket.from, bracket.rate)
                .and_then(|tranche| running.checked_add(tranche))
                .ok_or(BracketTableError::BaseOverflow { index })?;
        }
    }
    Ok(bases)
}

/// Rewrites a table into cumulative-base form with derived bases.
///
/// # Errors
///
/// [`BracketTableError`] if the table breaks an invariant.
pub fn to_cumulative(brackets: &[Bracket]) -> Result<Vec<Bracket>, BracketTableError> {
    let bases = derive_bases(brackets)?;
    Ok(brackets
        .iter()
        .zip(bases)
        .map(|(b, base)| Bracket::cumulative(b.from, b.to, b.rate, base))
        .collect())
}

/// Checks a cumulative-base table's own `base` values against tranche
/// summation. Tranche tables trivially pass.
///
/// # Errors
///
/// [`BracketTableError::BaseMismatch`] for the first bracket whose declared
/// base differs from the derived one by more than `tolerance`.
pub fn verify_bases(
    brackets: &[Bracket],
    tolerance: Decimal,
) -> Result<(), BracketTableError> {
    let derived = derive_bases(brackets)?;

    for (index, (bracket, derived)) in brackets.iter().zip(derived).enumerate() {
        if let Some(declared) = bracket.base {
            if (declared - derived).abs() > tolerance {
                return Err(BracketTableError::BaseMismatch {
                    index,
                    declared,
                    derived,
                });
            }
        }
    }
    Ok(())
}

/// Highest marginal rate in the table.
pub fn top_rate(brackets: &[Bracket]) -> Option<Decimal> {
    brackets.iter().map(|b| b.rate).max()
}
