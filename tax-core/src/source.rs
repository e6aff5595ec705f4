use crate::error::TaxError;
use crate::models::TaxYearTables;

/// Supplies immutable rate tables to the engine.
///
/// Implementations hold process-wide constant data; every method takes
/// `&self` and none may mutate shared state.
pub trait RateTableSource: Send + Sync {
    /// Tables for `year`, if this source carries them.
    fn tax_year(
        &self,
        year: i32,
    ) -> Option<&TaxYearTables>;

    /// Every tax year this source carries, ascending.
    fn available_years(&self) -> Vec<i32>;

    /// Like [`tax_year`](Self::tax_year), failing with
    /// [`TaxError::UnsupportedTaxYear`] when the year is absent.
    fn require_tax_year(
        &self,
        year: i32,
    ) -> Result<&TaxYearTables, TaxError> {
        self.tax_year(year)
            .ok_or(TaxError::UnsupportedTaxYear(year))
    }
}
