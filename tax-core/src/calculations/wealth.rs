//! Cantonal and communal wealth tax.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::brackets::compute_bracket_tax;
use crate::calculations::common::{apply_multiplier, round_half_up};
use crate::error::TaxError;
use crate::models::{Jurisdiction, Municipality, TaxpayerProfile};

/// Wealth tax for one taxpayer in one municipality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthTaxResult {
    /// Declared assets minus debts, never below zero.
    pub net_wealth: Decimal,
    pub allowance: Decimal,
    pub taxable_wealth: Decimal,
    pub simple_tax: Decimal,
    pub cantonal_tax: Decimal,
    pub communal_tax: Decimal,
    pub total_tax: Decimal,
}

/// Computes the wealth tax of `profile` in `municipality`.
///
/// The wealth simple tax is scaled by the same cantonal rate and communal
/// multiplier as the income tax.
///
/// # Errors
///
/// - [`TaxError::InvalidBracketTable`] if the canton's wealth table is malformed
/// - [`TaxError::NegativeAmount`] if the profile declares a negative asset
/// - [`TaxError::AmountOutOfRange`] if a declared amount is beyond
///   [`MAX_AMOUNT`](crate::calculations::MAX_AMOUNT)
pub fn compute_wealth_tax(
    profile: &TaxpayerProfile,
    jurisdiction: &Jurisdiction,
    municipality: &Municipality,
) -> Result<WealthTaxResult, TaxError> {
    profile.validate()?;

    let allowances = &jurisdiction.wealth_allowances;
    let net_wealth = round_half_up(profile.assets.net_wealth());
    let base_allowance = if profile.is_joint() {
        allowances.married
    } else {
        allowances.single
    };
    let allowance =
        base_allowance + allowances.per_child * Decimal::from(profile.personal.children);
    let taxable_wealth = (net_wealth - allowance).max(Decimal::ZERO);

    let simple_tax = compute_bracket_tax(taxable_wealth, jurisdiction.wealth)?;
    let cantonal_tax = apply_multiplier(simple_tax, jurisdiction.cantonal_rate);
    let communal_tax = apply_multiplier(simple_tax, municipality.multiplier);

    debug!(
        canton = jurisdiction.code,
        municipality = municipality.name,
        taxable_wealth = %taxable_wealth,
        simple_tax = %simple_tax,
        "wealth tax computed"
    );

    Ok(WealthTaxResult {
        net_wealth,
        allowance,
        taxable_wealth,
        simple_tax,
        cantonal_tax,
        communal_tax,
        total_tax: cantonal_tax + communal_tax,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::CivilStatus;
    use crate::test_fixtures::{CUMULATIVE_CANTON, TRANCHE_CANTON};

    fn with_bank_balance(balance: Decimal) -> TaxpayerProfile {
        let mut profile = TaxpayerProfile::default();
        profile.assets.bank_accounts = balance;
        profile
    }

    #[test]
    fn wealth_below_allowance_is_untaxed() {
        let canton = &TRANCHE_CANTON;
        let profile = with_bank_balance(dec!(80000));

        let result = compute_wealth_tax(&profile, canton, &canton.municipalities[0]).unwrap();

        assert_eq!(result.taxable_wealth, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
    }

    #[test]
    fn wealth_above_allowance_is_scaled_by_both_multipliers() {
        let canton = &TRANCHE_CANTON;
        let profile = with_bank_balance(dec!(300000));

        let alpha = compute_wealth_tax(&profile, canton, &canton.municipalities[0]).unwrap();
        let beta = compute_wealth_tax(&profile, canton, &canton.municipalities[1]).unwrap();

        // 0.5% of (300,000 − 100,000)
        assert_eq!(
            alpha,
            WealthTaxResult {
                net_wealth: dec!(300000),
                allowance: dec!(100000),
                taxable_wealth: dec!(200000),
                simple_tax: dec!(1000.00),
                cantonal_tax: dec!(1000.00),
                communal_tax: dec!(1000.00),
                total_tax: dec!(2000.00),
            }
        );
        assert_eq!(beta.communal_tax, dec!(500.00));
        assert_eq!(beta.total_tax, dec!(1500.00));
    }

    #[test]
    fn debts_reduce_net_wealth() {
        let canton = &TRANCHE_CANTON;
        let mut profile = with_bank_balance(dec!(300000));
        profile.assets.debts = dec!(150000);

        let result = compute_wealth_tax(&profile, canton, &canton.municipalities[0]).unwrap();

        assert_eq!(result.net_wealth, dec!(150000));
        assert_eq!(result.taxable_wealth, dec!(50000));
    }

    #[test]
    fn married_allowance_and_children() {
        let canton = &CUMULATIVE_CANTON;
        let mut profile = with_bank_balance(dec!(200000));
        profile.personal.civil_status = CivilStatus::Married;
        profile.personal.children = 2;

        let result = compute_wealth_tax(&profile, canton, &canton.municipalities[0]).unwrap();

        // 100,000 married + 2 × 10,000
        assert_eq!(result.allowance, dec!(120000));
        assert_eq!(result.taxable_wealth, dec!(80000));
        // 0.1% simple tax, cantonal 200%, communal 80%
        assert_eq!(result.simple_tax, dec!(80.00));
        assert_eq!(result.cantonal_tax, dec!(160.00));
        assert_eq!(result.communal_tax, dec!(64.00));
    }

    #[test]
    fn negative_asset_fails() {
        let canton = &TRANCHE_CANTON;
        let mut profile = TaxpayerProfile::default();
        profile.assets.securities = dec!(-1);

        let result = compute_wealth_tax(&profile, canton, &canton.municipalities[0]);

        assert!(matches!(
            result,
            Err(TaxError::NegativeAmount {
                field: "assets.securities",
                ..
            })
        ));
    }

    #[test]
    fn asset_beyond_limit_fails() {
        let canton = &TRANCHE_CANTON;
        let mut profile = TaxpayerProfile::default();
        profile.assets.real_estate = Decimal::MAX;

        let result = compute_wealth_tax(&profile, canton, &canton.municipalities[0]);

        assert!(matches!(
            result,
            Err(TaxError::AmountOutOfRange {
                field: "assets.real_estate",
                ..
            })
        ));
    }
}
