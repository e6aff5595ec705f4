use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_core::calculations::verify_bases;
use tax_core::{Bracket, BracketTableError, RateTableSource, TaxYearTables};
use thiserror::Error;

use crate::cantons::CANTONS_2024;
use crate::federal::FEDERAL;

/// Rate tables for tax year 2024.
pub static TABLES_2024: TaxYearTables = TaxYearTables {
    tax_year: 2024,
    federal: FEDERAL,
    cantons: CANTONS_2024,
};

static YEARS: &[&TaxYearTables] = &[&TABLES_2024];

/// Largest accepted drift between a published `base` and tranche summation.
pub const BASE_TOLERANCE: Decimal = dec!(0.01);

/// A defect found by [`CompiledRateTables::validate_all`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIssue {
    #[error("{year} {table}: {source}")]
    Brackets {
        year: i32,
        table: String,
        #[source]
        source: BracketTableError,
    },

    #[error("{year} {canton}: no municipalities listed")]
    NoMunicipalities { year: i32, canton: &'static str },

    #[error("{year}: canton {canton} listed more than once")]
    DuplicateCanton { year: i32, canton: &'static str },
}

/// The compiled-in Rate Table Store.
///
/// All data is static; this type only gives it a [`RateTableSource`] face.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompiledRateTables;

impl CompiledRateTables {
    pub fn new() -> Self {
        Self
    }

    /// Every bracket table of every year, labelled `"<owner>/<table>"`.
    pub fn bracket_tables(&self) -> Vec<(i32, String, &'static [Bracket])> {
        YEARS
            .iter()
            .flat_map(|year| {
                let federal = [
                    ("federal/single".to_string(), year.federal.income.single),
                    ("federal/married".to_string(), year.federal.income.married),
                ];
                let cantons = year.cantons.iter().flat_map(|canton| {
                    [
                        (format!("{}/single", canton.code), canton.income.single),
                        (format!("{}/married", canton.code), canton.income.married),
                        (format!("{}/wealth", canton.code), canton.wealth),
                    ]
                });
                federal
                    .into_iter()
                    .chain(cantons)
                    .map(|(label, table)| (year.tax_year, label, table))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Checks every table of every year and reports all defects found.
    ///
    /// Bracket tables must satisfy the ordering invariants, and published
    /// bases must agree with tranche summation within [`BASE_TOLERANCE`].
    /// Every canton must list a municipality and appear once per year.
    ///
    /// # Errors
    ///
    /// Every [`TableIssue`] found, in table order.
    pub fn validate_all(&self) -> Result<(), Vec<TableIssue>> {
        let mut issues: Vec<TableIssue> = self
            .bracket_tables()
            .into_iter()
            .filter_map(|(year, table, brackets)| {
                verify_bases(brackets, BASE_TOLERANCE)
                    .err()
                    .map(|source| TableIssue::Brackets {
                        year,
                        table,
                        source,
                    })
            })
            .collect();

        for year in YEARS {
            for (index, canton) in year.cantons.iter().enumerate() {
                if canton.municipalities.is_empty() {
                    issues.push(TableIssue::NoMunicipalities {
                        year: year.tax_year,
                        canton: canton.code,
                    });
                }
                if year.cantons[..index]
                    .iter()
                    .any(|earlier| earlier.code.eq_ignore_ascii_case(canton.code))
                {
                    issues.push(TableIssue::DuplicateCanton {
                        year: year.tax_year,
                        canton: canton.code,
                    });
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

impl RateTableSource for CompiledRateTables {
    fn tax_year(
        &self,
        year: i32,
    ) -> Option<&TaxYearTables> {
        YEARS
            .iter()
            .copied()
            .find(|tables| tables.tax_year == year)
    }

    fn available_years(&self) -> Vec<i32> {
        YEARS.iter().map(|tables| tables.tax_year).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tax_core::calculations::compute_bracket_tax;

    use super::*;

    #[test]
    fn compiled_tables_are_valid() {
        assert_eq!(CompiledRateTables::new().validate_all(), Ok(()));
    }

    #[test]
    fn only_2024_is_compiled_in() {
        let store = CompiledRateTables::new();

        assert_eq!(store.available_years(), vec![2024]);
        assert!(store.tax_year(2024).is_some());
        assert!(store.tax_year(2023).is_none());
    }

    #[test]
    fn eight_cantons_in_official_order() {
        let codes = TABLES_2024.canton_codes();

        assert_eq!(codes, vec!["ZH", "BE", "LU", "ZG", "BS", "VD", "GE", "TI"]);
    }

    #[test]
    fn every_table_is_labelled() {
        let tables = CompiledRateTables::new().bracket_tables();

        // 2 federal + 3 per canton
        assert_eq!(tables.len(), 2 + 3 * 8);
        assert!(tables.iter().any(|(_, label, _)| label == "GE/wealth"));
    }

    #[test]
    fn zero_amount_is_untaxed_in_every_table() {
        for (year, label, table) in CompiledRateTables::new().bracket_tables() {
            let tax = compute_bracket_tax(Decimal::ZERO, table).unwrap();
            assert_eq!(tax, Decimal::ZERO, "{year} {label}");
        }
    }

    #[test]
    fn issue_display_names_the_table() {
        let issue = TableIssue::Brackets {
            year: 2024,
            table: "ZH/single".to_string(),
            source: BracketTableError::Empty,
        };

        assert_eq!(issue.to_string(), "2024 ZH/single: table has no brackets");
    }
}
