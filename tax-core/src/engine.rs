//! The tax orchestrator.
//!
//! [`TaxEngine`] composes the deduction aggregator, the bracket calculator
//! and the marginal-rate estimator into one linear pipeline:
//!
//! 1. resolve the tax year, canton and municipality
//! 2. aggregate federal and cantonal deductions
//! 3. taxable income per rule set, floored at zero
//! 4. federal tax from the federal table for the civil status
//! 5. simple tax from the canton table, scaled by the cantonal rate and the
//!    communal multiplier
//! 6. total, effective rate and both marginal rates
//! 7. wealth tax, reported alongside
//!
//! Any failing step aborts the computation. Nothing is cached and nothing
//! is shared between calls, so one engine can serve any number of threads.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::{
    aggregate_all, apply_multiplier, compute_bracket_tax, compute_wealth_tax,
    estimate_marginal_rate, round_half_up,
};
use crate::config::EngineConfig;
use crate::error::TaxError;
use crate::models::{
    Bracket, CantonComparison, CivilStatus, Jurisdiction, MarginalRates, Municipality,
    TaxResult, TaxableIncome, TaxpayerProfile,
};
use crate::source::RateTableSource;

/// Cantonal-side amounts for one taxable income.
#[derive(Debug, Clone, Copy)]
struct CantonalTaxes {
    simple: Decimal,
    cantonal: Decimal,
    communal: Decimal,
}

impl CantonalTaxes {
    fn compute(
        taxable_income: Decimal,
        table: &[Bracket],
        canton: &Jurisdiction,
        municipality: &Municipality,
    ) -> Result<Self, TaxError> {
        let simple = compute_bracket_tax(taxable_income, table)?;
        Ok(Self {
            simple,
            cantonal: apply_multiplier(simple, canton.cantonal_rate),
            communal: apply_multiplier(simple, municipality.multiplier),
        })
    }

    fn total(&self) -> Decimal {
        self.cantonal + self.communal
    }
}

/// Computes Swiss income and wealth tax from a [`RateTableSource`].
#[derive(Clone)]
pub struct TaxEngine<'a> {
    tables: &'a dyn RateTableSource,
    config: EngineConfig,
}

impl<'a> TaxEngine<'a> {
    pub fn new(tables: &'a dyn RateTableSource) -> Self {
        Self {
            tables,
            config: EngineConfig::default(),
        }
    }

    /// # Errors
    ///
    /// [`TaxError::InvalidConfig`] if `config` does not validate.
    pub fn with_config(
        tables: &'a dyn RateTableSource,
        config: EngineConfig,
    ) -> Result<Self, TaxError> {
        config.validate()?;
        Ok(Self { tables, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the full result for the canton and civil status in `profile`.
    ///
    /// # Errors
    ///
    /// - [`TaxError::UnsupportedTaxYear`] if no tables exist for `year`
    /// - [`TaxError::UnknownCanton`] if the canton code is not in the tables
    /// - [`TaxError::UnknownMunicipality`] if a named municipality is not listed
    /// - [`TaxError::NegativeAmount`] if the profile carries a negative amount
    /// - [`TaxError::AmountOutOfRange`] if a profile amount exceeds
    ///   [`MAX_AMOUNT`](crate::calculations::MAX_AMOUNT)
    /// - [`TaxError::InvalidBracketTable`] if a rate table is malformed
    pub fn compute_tax(
        &self,
        profile: &TaxpayerProfile,
        year: i32,
    ) -> Result<TaxResult, TaxError> {
        let tables = self.tables.require_tax_year(year)?;
        let canton = tables
            .canton(&profile.personal.canton)
            .ok_or_else(|| TaxError::UnknownCanton(profile.personal.canton.clone()))?;
        let municipality = resolve_municipality(canton, profile.personal.municipality.as_deref())?;
        debug!(
            tax_year = year,
            canton = canton.code,
            municipality = municipality.name,
            civil_status = profile.personal.civil_status.as_str(),
            "jurisdiction resolved"
        );

        let deductions = aggregate_all(profile, &tables.federal.deductions, &canton.deductions)?;

        let gross_income = round_half_up(profile.gross_income());
        let taxable_income = TaxableIncome {
            federal: taxable(gross_income, deductions.federal.total),
            cantonal: taxable(gross_income, deductions.cantonal.total),
        };
        debug!(
            gross_income = %gross_income,
            federal = %taxable_income.federal,
            cantonal = %taxable_income.cantonal,
            "taxable income"
        );

        let tariff = profile.personal.civil_status.tariff();
        let federal_table = tables.federal.income.for_tariff(tariff);
        let cantonal_table = canton.income.for_tariff(tariff);

        let federal_tax = compute_bracket_tax(taxable_income.federal, federal_table)?;
        let cantonal = CantonalTaxes::compute(
            taxable_income.cantonal,
            cantonal_table,
            canton,
            municipality,
        )?;
        let total_tax = federal_tax + cantonal.total();
        debug!(
            federal_tax = %federal_tax,
            simple_tax = %cantonal.simple,
            cantonal_tax = %cantonal.cantonal,
            communal_tax = %cantonal.communal,
            "income tax computed"
        );

        let effective_rate = if gross_income.is_zero() {
            Decimal::ZERO
        } else {
            round_half_up(total_tax / gross_income * Decimal::ONE_HUNDRED)
        };

        let increment = self.config.marginal_increment;
        let federal_marginal = estimate_marginal_rate(
            taxable_income.federal,
            |income| compute_bracket_tax(income, federal_table),
            increment,
        )?;

        // Both incomes move together from the larger of the two, each kept at
        // its own distance below it. Either one being positive is enough for
        // a nonzero rate.
        let base = taxable_income.federal.max(taxable_income.cantonal);
        let federal_gap = base - taxable_income.federal;
        let cantonal_gap = base - taxable_income.cantonal;
        let combined_marginal = estimate_marginal_rate(
            base,
            |income| {
                let federal_income = (income - federal_gap).max(Decimal::ZERO);
                let federal = compute_bracket_tax(federal_income, federal_table)?;
                let cantonal_income = (income - cantonal_gap).max(Decimal::ZERO);
                let cantonal =
                    CantonalTaxes::compute(cantonal_income, cantonal_table, canton, municipality)?;
                Ok(federal + cantonal.total())
            },
            increment,
        )?;

        let wealth = compute_wealth_tax(profile, canton, municipality)?;

        Ok(TaxResult {
            tax_year: year,
            canton: canton.code.to_string(),
            municipality: municipality.name.to_string(),
            civil_status: profile.personal.civil_status,
            gross_income,
            taxable_income,
            simple_tax: cantonal.simple,
            federal_tax,
            cantonal_tax: cantonal.cantonal,
            communal_tax: cantonal.communal,
            total_tax,
            effective_rate,
            marginal_rate: MarginalRates {
                federal: federal_marginal,
                combined: combined_marginal,
            },
            deductions,
            wealth,
        })
    }

    /// Computes the result for `profile` with its canton and civil status
    /// replaced. The caller's profile is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`compute_tax`](Self::compute_tax).
    pub fn compute_tax_for(
        &self,
        profile: &TaxpayerProfile,
        canton: &str,
        civil_status: CivilStatus,
        year: i32,
    ) -> Result<TaxResult, TaxError> {
        let mut profile = profile.clone();
        if !profile.personal.canton.trim().eq_ignore_ascii_case(canton.trim()) {
            // A municipality only means something in its own canton.
            profile.personal.municipality = None;
        }
        profile.personal.canton = canton.to_string();
        profile.personal.civil_status = civil_status;
        self.compute_tax(&profile, year)
    }

    /// Runs the same profile through every canton in `codes`, each at its
    /// capital, cheapest first.
    ///
    /// # Errors
    ///
    /// Any error from [`compute_tax`](Self::compute_tax); one unknown code
    /// fails the whole comparison.
    pub fn compare_cantons(
        &self,
        profile: &TaxpayerProfile,
        year: i32,
        codes: &[&str],
    ) -> Result<Vec<CantonComparison>, TaxError> {
        let mut rows = codes
            .iter()
            .map(|code| {
                let mut candidate = profile.clone();
                candidate.personal.canton = (*code).to_string();
                candidate.personal.municipality = None;

                self.compute_tax(&candidate, year).map(|result| CantonComparison {
                    canton: result.canton,
                    municipality: result.municipality,
                    total_tax: result.total_tax,
                    effective_rate: result.effective_rate,
                    wealth_tax: result.wealth.total_tax,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.sort_by(|a, b| a.total_tax.cmp(&b.total_tax));
        Ok(rows)
    }

    /// Federal income tax alone, for callers that already know the taxable
    /// income.
    ///
    /// # Errors
    ///
    /// - [`TaxError::UnsupportedTaxYear`] if no tables exist for `year`
    /// - [`TaxError::NegativeAmount`] if `taxable_income` is negative
    /// - [`TaxError::AmountOutOfRange`] if the tax overflows decimal arithmetic
    pub fn federal_tax(
        &self,
        taxable_income: Decimal,
        civil_status: CivilStatus,
        year: i32,
    ) -> Result<Decimal, TaxError> {
        let tables = self.tables.require_tax_year(year)?;
        compute_bracket_tax(
            taxable_income,
            tables.federal.income.for_tariff(civil_status.tariff()),
        )
    }
}

fn taxable(
    gross_income: Decimal,
    deductions: Decimal,
) -> Decimal {
    (gross_income - deductions).max(Decimal::ZERO)
}

/// The named municipality, or the capital when none is given.
fn resolve_municipality(
    canton: &Jurisdiction,
    name: Option<&str>,
) -> Result<&'static Municipality, TaxError> {
    let unknown = |municipality: &str| TaxError::UnknownMunicipality {
        canton: canton.code.to_string(),
        municipality: municipality.to_string(),
    };

    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => canton.municipality(name).ok_or_else(|| unknown(name)),
        None => canton.capital().ok_or_else(|| unknown("<capital>")),
    }
}
