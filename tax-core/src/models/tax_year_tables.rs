use serde::Serialize;

use super::{FederalTables, Jurisdiction};

/// Complete rate tables for one tax year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxYearTables {
    pub tax_year: i32,
    pub federal: FederalTables,
    pub cantons: &'static [Jurisdiction],
}

impl TaxYearTables {
    /// Looks up a canton by its two-letter code, ignoring case.
    pub fn canton(
        &self,
        code: &str,
    ) -> Option<&'static Jurisdiction> {
        let code = code.trim();
        self.cantons
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Canton codes in table order.
    pub fn canton_codes(&self) -> Vec<&'static str> {
        self.cantons.iter().map(|c| c.code).collect()
    }
}
