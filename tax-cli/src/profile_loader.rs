//! Taxpayer profile input.
//!
//! A single profile is a TOML document mirroring [`TaxpayerProfile`]:
//!
//! ```toml
//! [personal]
//! canton = "GE"
//! civil_status = "married"
//! children = 2
//!
//! [income]
//! employment_gross = "120000"
//!
//! [deductions]
//! pillar_3a = "7056"
//! ```
//!
//! A batch is a CSV file with one profile per row. Headers are matched by
//! name, so column order does not matter.
//!
//! | Column                    | Required | Notes                              |
//! |---------------------------|----------|------------------------------------|
//! | `label`                   | yes      | Shown in the batch report          |
//! | `canton`                  | yes      | e.g. `ZH`                          |
//! | `civil_status`            | yes      | One of `S`, `M`, `RP`, `D`, `W`    |
//! | `municipality`            | no       | Empty for the canton's capital     |
//! | `children`                | no       | Empty for none                     |
//! | `employment_gross`        | no       |                                    |
//! | `spouse_employment_gross` | no       | Joint returns only                 |
//! | `self_employment_net`     | no       |                                    |
//! | `rental`                  | no       |                                    |
//! | `pensions`                | no       |                                    |
//! | `public_transport`        | no       |                                    |
//! | `commute_km`              | no       |                                    |
//! | `health_insurance`        | no       |                                    |
//! | `pillar_3a`               | no       |                                    |
//! | `childcare`               | no       |                                    |
//! | `donations`               | no       |                                    |
//! | `net_wealth`              | no       | Booked as bank accounts            |
//!
//! ```csv
//! label,canton,civil_status,employment_gross
//! Zurich single,ZH,S,95000
//! Geneva couple,GE,M,160000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{
    CivilStatus, DeclaredAssets, DeclaredDeductions, IncomeSources, PersonalInfo, TaxpayerProfile,
};
use tracing::debug;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct BatchRow {
    label: String,
    canton: String,
    civil_status: String,
    #[serde(default)]
    municipality: Option<String>,
    #[serde(default)]
    children: Option<u32>,
    #[serde(default)]
    employment_gross: Option<Decimal>,
    #[serde(default)]
    spouse_employment_gross: Option<Decimal>,
    #[serde(default)]
    self_employment_net: Option<Decimal>,
    #[serde(default)]
    rental: Option<Decimal>,
    #[serde(default)]
    pensions: Option<Decimal>,
    #[serde(default)]
    public_transport: Option<Decimal>,
    #[serde(default)]
    commute_km: Option<Decimal>,
    #[serde(default)]
    health_insurance: Option<Decimal>,
    #[serde(default)]
    pillar_3a: Option<Decimal>,
    #[serde(default)]
    childcare: Option<Decimal>,
    #[serde(default)]
    donations: Option<Decimal>,
    #[serde(default)]
    net_wealth: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One labelled profile from a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub label: String,
    pub profile: TaxpayerProfile,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileLoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bad structure, a missing required column or a malformed number.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, the header being row 0.
    #[error("unrecognised civil status '{status}' on row {row}")]
    InvalidCivilStatus { status: String, row: usize },
}

// ---------------------------------------------------------------------------
// Single profile
// ---------------------------------------------------------------------------

pub fn load_profile_from_str(input: &str) -> Result<TaxpayerProfile, ProfileLoadError> {
    Ok(toml::from_str(input)?)
}

pub fn load_profile(path: &Path) -> Result<TaxpayerProfile, ProfileLoadError> {
    let profile = load_profile_from_str(&read(path)?)?;
    debug!(path = %path.display(), canton = %profile.personal.canton, "loaded profile");
    Ok(profile)
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

fn convert_row(
    row: BatchRow,
    row_number: usize,
) -> Result<BatchEntry, ProfileLoadError> {
    let civil_status = CivilStatus::parse(&row.civil_status).ok_or_else(|| {
        ProfileLoadError::InvalidCivilStatus {
            status: row.civil_status.clone(),
            row: row_number,
        }
    })?;
    let amount = |value: Option<Decimal>| value.unwrap_or_default();

    let profile = TaxpayerProfile {
        personal: PersonalInfo {
            canton: row.canton,
            municipality: row.municipality.filter(|m| !m.is_empty()),
            civil_status,
            children: row.children.unwrap_or_default(),
            ..Default::default()
        },
        income: IncomeSources {
            employment_gross: amount(row.employment_gross),
            spouse_employment_gross: amount(row.spouse_employment_gross),
            self_employment_net: amount(row.self_employment_net),
            rental: amount(row.rental),
            pensions: amount(row.pensions),
            ..Default::default()
        },
        deductions: DeclaredDeductions {
            public_transport: amount(row.public_transport),
            commute_km: amount(row.commute_km),
            health_insurance: amount(row.health_insurance),
            pillar_3a: amount(row.pillar_3a),
            childcare: amount(row.childcare),
            donations: amount(row.donations),
            ..Default::default()
        },
        assets: DeclaredAssets {
            bank_accounts: amount(row.net_wealth),
            ..Default::default()
        },
    };

    Ok(BatchEntry {
        label: row.label,
        profile,
    })
}

/// Parses a batch file's contents. Rows come back in file order.
///
/// # Errors
///
/// * [`ProfileLoadError::Parse`] if the CSV is structurally invalid or a
///   required field cannot be deserialised.
/// * [`ProfileLoadError::InvalidCivilStatus`] if a row carries an
///   unrecognised civil-status code.
pub fn load_batch_from_str(input: &str) -> Result<Vec<BatchEntry>, ProfileLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<BatchRow>()
        .enumerate()
        .map(|(index, result)| convert_row(result?, index + 1))
        .collect()
}

pub fn load_batch(path: &Path) -> Result<Vec<BatchEntry>, ProfileLoadError> {
    let entries = load_batch_from_str(&read(path)?)?;
    debug!(path = %path.display(), rows = entries.len(), "loaded batch");
    Ok(entries)
}

fn read(path: &Path) -> Result<String, ProfileLoadError> {
    fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
