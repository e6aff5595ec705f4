//! CSV reader for bracket tables.
//!
//! Used to check a newly published tariff before it is transcribed into the
//! compiled data. Columns are `from,to,rate,base`; an empty `to` marks the
//! unbounded top bracket and the `base` column may be empty or absent for a
//! tranche-form table.

use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::calculations::{derive_bases, validate_brackets};
use tax_core::{Bracket, BracketEncoding, BracketTableError};
use thiserror::Error;

/// Errors that can occur when reading a bracket table.
#[derive(Debug, Error)]
pub enum BracketCsvError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid bracket table: {0}")]
    InvalidTable(#[from] BracketTableError),
}

impl From<csv::Error> for BracketCsvError {
    fn from(err: csv::Error) -> Self {
        BracketCsvError::CsvParse(err.to_string())
    }
}

/// A single row of a bracket CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub from: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub to: Option<Decimal>,
    pub rate: Decimal,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub base: Option<Decimal>,
}

impl From<&BracketRecord> for Bracket {
    fn from(record: &BracketRecord) -> Self {
        Bracket {
            from: record.from,
            to: record.to,
            rate: record.rate,
            base: record.base,
        }
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Parses bracket records from any reader, such as a file or a byte slice.
///
/// # Errors
///
/// [`BracketCsvError::CsvParse`] for a missing column or a malformed number.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketCsvError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let record: BracketRecord = result?;
        records.push(record);
    }

    Ok(records)
}

/// Parses a bracket table and checks its ordering invariants.
///
/// # Errors
///
/// - [`BracketCsvError::CsvParse`] if the CSV is malformed
/// - [`BracketCsvError::InvalidTable`] if the rows do not form a valid table
pub fn parse_brackets<R: Read>(reader: R) -> Result<Vec<Bracket>, BracketCsvError> {
    let brackets: Vec<Bracket> = parse_records(reader)?.iter().map(Bracket::from).collect();
    validate_brackets(&brackets)?;
    Ok(brackets)
}

/// One row of a [`TableReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub bracket: Bracket,
    pub derived_base: Decimal,
    /// Set when the row declares a base that drifts beyond the tolerance.
    pub mismatch: bool,
}

/// Derived bases for every row, with mismatching declared bases flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub encoding: BracketEncoding,
    pub rows: Vec<ReportRow>,
}

impl TableReport {
    /// Builds the report for a table.
    ///
    /// # Errors
    ///
    /// [`BracketTableError`] if the table breaks an ordering invariant.
    pub fn build(
        brackets: &[Bracket],
        tolerance: Decimal,
    ) -> Result<Self, BracketTableError> {
        let encoding = validate_brackets(brackets)?;
        let rows = brackets
            .iter()
            .zip(derive_bases(brackets)?)
            .map(|(bracket, derived_base)| ReportRow {
                bracket: *bracket,
                derived_base,
                mismatch: bracket
                    .base
                    .is_some_and(|declared| (declared - derived_base).abs() > tolerance),
            })
            .collect();

        Ok(Self { encoding, rows })
    }

    pub fn mismatches(&self) -> usize {
        self.rows.iter().filter(|row| row.mismatch).count()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const FEDERAL_SINGLE_CSV: &str = r#"from,to,rate,base
0,14500,0,0
14500,31600,0.77,0
31600,41400,0.88,131.67
41400,55200,2.64,217.91
55200,72500,2.97,582.23
72500,78100,5.94,1096.04
78100,103600,6.60,1428.68
103600,134600,8.80,3111.68
134600,176000,11.00,5839.68
176000,755200,13.20,10393.68
755200,,11.50,86848.08
"#;

    #[test]
    fn test_parse_single_record() {
        let csv = "from,to,rate,base\n0,14500,0,0";

        let records = parse_records(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(
            records,
            vec![BracketRecord {
                from: dec!(0),
                to: Some(dec!(14500)),
                rate: dec!(0),
                base: Some(dec!(0)),
            }]
        );
    }

    #[test]
    fn test_parse_unbounded_top_bracket() {
        let csv = "from,to,rate,base\n755200,,11.50,86848.08";

        let records = parse_records(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(records[0].to, None);
        assert_eq!(records[0].base, Some(dec!(86848.08)));
    }

    #[test]
    fn test_parse_tranche_table_without_base_column() {
        let csv = "from,to,rate\n0,6900,0\n6900,,2";

        let brackets = parse_brackets(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(
            brackets,
            vec![
                Bracket::tranche(dec!(0), Some(dec!(6900)), dec!(0)),
                Bracket::tranche(dec!(6900), None, dec!(2)),
            ]
        );
    }

    #[test]
    fn test_parse_full_federal_table() {
        let brackets = parse_brackets(FEDERAL_SINGLE_CSV.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(brackets.len(), 11);
        assert_eq!(brackets[10].rate, dec!(11.50));
    }

    #[test]
    fn test_parse_invalid_csv_missing_column() {
        let csv = "from,rate\n0,0";

        let err = parse_records(csv.as_bytes()).expect_err("Should fail for missing column");

        let BracketCsvError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(
            msg.contains("missing field"),
            "Expected 'missing field' in error, got: {}",
            msg
        );
    }

    #[test]
    fn test_parse_invalid_csv_bad_decimal() {
        let csv = "from,to,rate,base\nabc,14500,0,0";

        let err = parse_records(csv.as_bytes()).expect_err("Should fail for invalid decimal");

        assert!(matches!(err, BracketCsvError::CsvParse(_)));
    }

    #[test]
    fn test_parse_empty_csv_is_invalid_table() {
        let csv = "from,to,rate,base\n";

        let err = parse_brackets(csv.as_bytes()).expect_err("Should fail for empty table");

        assert!(matches!(
            err,
            BracketCsvError::InvalidTable(BracketTableError::Empty)
        ));
    }

    #[test]
    fn test_parse_gap_is_invalid_table() {
        let csv = "from,to,rate\n0,1000,0\n2000,,1";

        let err = parse_brackets(csv.as_bytes()).expect_err("Should fail for gap");

        assert!(matches!(
            err,
            BracketCsvError::InvalidTable(BracketTableError::Gap { index: 0, .. })
        ));
    }

    #[test]
    fn test_report_federal_table_has_no_mismatch() {
        let brackets = parse_brackets(FEDERAL_SINGLE_CSV.as_bytes()).unwrap();

        let report = TableReport::build(&brackets, dec!(0.01)).unwrap();

        assert_eq!(report.encoding, BracketEncoding::CumulativeBase);
        assert_eq!(report.mismatches(), 0);
        assert_eq!(report.rows[2].derived_base, dec!(131.67));
    }

    #[test]
    fn test_report_flags_wrong_base() {
        let csv = "from,to,rate,base\n0,10000,1,0\n10000,,2,150";
        let brackets = parse_brackets(csv.as_bytes()).unwrap();

        let report = TableReport::build(&brackets, dec!(0.01)).unwrap();

        assert_eq!(report.mismatches(), 1);
        assert!(report.rows[1].mismatch);
        assert_eq!(report.rows[1].derived_base, dec!(100.00));
    }
}
