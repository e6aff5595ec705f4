use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CivilStatus;
use crate::calculations::{DeductionSummary, WealthTaxResult};

/// Output of one full tax computation. Built fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub tax_year: i32,
    pub canton: String,
    pub municipality: String,
    pub civil_status: CivilStatus,

    pub gross_income: Decimal,
    pub taxable_income: TaxableIncome,

    /// Cantonal bracket-table output before any multiplier.
    pub simple_tax: Decimal,
    pub federal_tax: Decimal,
    pub cantonal_tax: Decimal,
    pub communal_tax: Decimal,
    /// Federal + cantonal + communal income tax. Wealth tax is reported
    /// separately.
    pub total_tax: Decimal,

    /// `total_tax / gross_income`, as a percentage.
    pub effective_rate: Decimal,
    pub marginal_rate: MarginalRates,

    pub deductions: DeductionBreakdown,
    pub wealth: WealthTaxResult,
}

/// Federal and cantonal taxable income differ because their deduction rules
/// differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableIncome {
    pub federal: Decimal,
    pub cantonal: Decimal,
}

/// Marginal rates, as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginalRates {
    pub federal: Decimal,
    /// Federal + cantonal + communal.
    pub combined: Decimal,
}

/// Deductions per rule set.
///
/// `federal` and `cantonal` are authoritative for their own computation.
/// `combined` is a display figure only and feeds no tax amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub federal: DeductionSummary,
    pub cantonal: DeductionSummary,
    pub combined: DeductionSummary,
}

/// One row of a canton comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantonComparison {
    pub canton: String,
    pub municipality: String,
    pub total_tax: Decimal,
    pub effective_rate: Decimal,
    pub wealth_tax: Decimal,
}
