use rust_decimal::Decimal;
use serde::Serialize;

use super::{Bracket, DeductionPolicy, Tariff};

/// A municipality and its communal multiplier.
///
/// `multiplier` is a percentage of the canton's simple tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Municipality {
    pub name: &'static str,
    pub multiplier: Decimal,
}

/// Income bracket tables keyed by tariff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeTables {
    pub single: &'static [Bracket],
    pub married: &'static [Bracket],
}

impl IncomeTables {
    pub fn for_tariff(
        &self,
        tariff: Tariff,
    ) -> &'static [Bracket] {
        match tariff {
            Tariff::Single => self.single,
            Tariff::Married => self.married,
        }
    }
}

/// Tax-free wealth before the wealth tariff applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WealthAllowances {
    pub single: Decimal,
    pub married: Decimal,
    pub per_child: Decimal,
}

/// Everything the engine needs to know about one canton.
///
/// `cantonal_rate` is the canton's own multiplier on the simple tax. A value
/// of 100 means the bracket table already yields the final cantonal amount;
/// other cantons publish a "simple" tariff and scale it. Each canton keeps
/// the pair it documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Jurisdiction {
    /// Two-letter cantonal abbreviation, upper case.
    pub code: &'static str,
    pub name: &'static str,
    pub cantonal_rate: Decimal,
    pub income: IncomeTables,
    pub wealth: &'static [Bracket],
    pub wealth_allowances: WealthAllowances,
    /// The first entry is the cantonal capital.
    pub municipalities: &'static [Municipality],
    pub deductions: DeductionPolicy,
}

impl Jurisdiction {
    pub fn capital(&self) -> Option<&'static Municipality> {
        self.municipalities.first()
    }

    /// Case-insensitive lookup by municipality name.
    pub fn municipality(
        &self,
        name: &str,
    ) -> Option<&'static Municipality> {
        // Names carry umlauts and accents, so ASCII case folding is not enough.
        let wanted = name.trim().to_lowercase();
        self.municipalities
            .iter()
            .find(|m| m.name.to_lowercase() == wanted)
    }
}

/// Federal income tax tables and deduction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FederalTables {
    pub income: IncomeTables,
    pub deductions: DeductionPolicy,
}
