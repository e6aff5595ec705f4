//! Plain-text and JSON rendering of engine output.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tax_core::calculations::DeductionSummary;
use tax_core::{CantonComparison, TaxResult};

const LABEL_WIDTH: usize = 30;
const AMOUNT_WIDTH: usize = 14;

/// Formats francs with Swiss digit grouping, e.g. `1'234'567.50`.
pub fn format_chf(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}

fn format_percent(rate: Decimal) -> String {
    format!("{:.2} %", rate)
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

// ---------------------------------------------------------------------------
// Single result
// ---------------------------------------------------------------------------

/// Full breakdown of one computation.
pub struct TextReport<'a>(pub &'a TaxResult);

fn line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &str,
) -> fmt::Result {
    writeln!(f, "  {label:<LABEL_WIDTH$}{value:>AMOUNT_WIDTH$}")
}

fn deduction_lines(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    summary: &DeductionSummary,
) -> fmt::Result {
    writeln!(f, "{title}")?;
    for item in &summary.items {
        line(f, item.kind.label(), &format_chf(item.amount))?;
    }
    line(f, "Total", &format_chf(summary.total))
}

impl fmt::Display for TextReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.0;
        writeln!(
            f,
            "Tax year {}, {} {}, {}",
            r.tax_year,
            r.canton,
            r.municipality,
            r.civil_status.label()
        )?;
        writeln!(f)?;

        writeln!(f, "Income")?;
        line(f, "Gross income", &format_chf(r.gross_income))?;
        line(f, "Taxable income (federal)", &format_chf(r.taxable_income.federal))?;
        line(f, "Taxable income (cantonal)", &format_chf(r.taxable_income.cantonal))?;
        writeln!(f)?;

        deduction_lines(f, "Federal deductions", &r.deductions.federal)?;
        writeln!(f)?;
        deduction_lines(f, "Cantonal deductions", &r.deductions.cantonal)?;
        writeln!(f)?;

        writeln!(f, "Income tax")?;
        line(f, "Federal", &format_chf(r.federal_tax))?;
        line(f, "Simple tax", &format_chf(r.simple_tax))?;
        line(f, "Cantonal", &format_chf(r.cantonal_tax))?;
        line(f, "Communal", &format_chf(r.communal_tax))?;
        line(f, "Total", &format_chf(r.total_tax))?;
        line(f, "Effective rate", &format_percent(r.effective_rate))?;
        line(f, "Marginal rate (federal)", &format_percent(r.marginal_rate.federal))?;
        line(f, "Marginal rate (combined)", &format_percent(r.marginal_rate.combined))?;

        if r.wealth.net_wealth > Decimal::ZERO {
            writeln!(f)?;
            writeln!(f, "Wealth tax")?;
            line(f, "Net wealth", &format_chf(r.wealth.net_wealth))?;
            line(f, "Allowance", &format_chf(r.wealth.allowance))?;
            line(f, "Taxable wealth", &format_chf(r.wealth.taxable_wealth))?;
            line(f, "Cantonal", &format_chf(r.wealth.cantonal_tax))?;
            line(f, "Communal", &format_chf(r.wealth.communal_tax))?;
            line(f, "Total", &format_chf(r.wealth.total_tax))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Canton comparison, one row per canton in the order given.
pub struct ComparisonTable<'a>(pub &'a [CantonComparison]);

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<8}{:<20}{:>14}{:>10}{:>14}",
            "Canton", "Municipality", "Income tax", "Rate", "Wealth tax"
        )?;
        for row in self.0 {
            writeln!(
                f,
                "{:<8}{:<20}{:>14}{:>10}{:>14}",
                row.canton,
                row.municipality,
                format_chf(row.total_tax),
                format_percent(row.effective_rate),
                format_chf(row.wealth_tax)
            )?;
        }
        Ok(())
    }
}

/// Outcome of one batch row. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchLine {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TaxResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchLine {
    pub fn ok(
        label: String,
        result: TaxResult,
    ) -> Self {
        Self {
            label,
            result: Some(result),
            error: None,
        }
    }

    pub fn failed(
        label: String,
        error: impl fmt::Display,
    ) -> Self {
        Self {
            label,
            result: None,
            error: Some(error.to_string()),
        }
    }
}

pub struct BatchTable<'a>(pub &'a [BatchLine]);

impl fmt::Display for BatchTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<24}{:<8}{:>14}{:>14}{:>10}",
            "Label", "Canton", "Gross", "Income tax", "Rate"
        )?;
        for entry in self.0 {
            match (&entry.result, &entry.error) {
                (Some(r), _) => writeln!(
                    f,
                    "{:<24}{:<8}{:>14}{:>14}{:>10}",
                    entry.label,
                    r.canton,
                    format_chf(r.gross_income),
                    format_chf(r.total_tax),
                    format_percent(r.effective_rate)
                )?,
                (None, error) => writeln!(
                    f,
                    "{:<24}error: {}",
                    entry.label,
                    error.as_deref().unwrap_or("unknown")
                )?,
            }
        }
        Ok(())
    }
}
