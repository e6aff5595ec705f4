use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CivilStatus;
use crate::calculations::MAX_AMOUNT;
use crate::error::TaxError;

/// Input record supplied by the caller. The engine only ever reads it.
///
/// Every amount is an annual figure in francs. Sections missing from a
/// deserialised document default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub income: IncomeSources,
    #[serde(default)]
    pub deductions: DeclaredDeductions,
    #[serde(default)]
    pub assets: DeclaredAssets,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Two-letter cantonal abbreviation.
    pub canton: String,
    /// Defaults to the canton's capital when absent.
    #[serde(default)]
    pub municipality: Option<String>,
    #[serde(default)]
    pub civil_status: CivilStatus,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub employment: Employment,
}

/// Determines which pillar 3a ceiling applies to the taxpayer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Employment {
    #[default]
    Employed,
    SelfEmployed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeSources {
    /// Gross salary of the taxpayer.
    pub employment_gross: Decimal,
    /// Gross salary of the spouse; only counted on a joint return.
    pub spouse_employment_gross: Decimal,
    pub self_employment_net: Decimal,
    pub rental: Decimal,
    pub pensions: Decimal,
    pub unemployment: Decimal,
    pub other: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclaredDeductions {
    /// Public-transport season tickets and fares for commuting.
    pub public_transport: Decimal,
    /// One-way commuting distance by car, in kilometres.
    pub commute_km: Decimal,
    pub meals: Decimal,
    pub other_professional: Decimal,
    pub health_insurance: Decimal,
    pub life_insurance: Decimal,
    pub pillar_3a: Decimal,
    /// Spouse's own pillar 3a contribution; only counted on a joint return.
    pub spouse_pillar_3a: Decimal,
    pub childcare: Decimal,
    pub donations: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclaredAssets {
    pub bank_accounts: Decimal,
    pub securities: Decimal,
    pub real_estate: Decimal,
    pub vehicles: Decimal,
    pub other: Decimal,
    pub debts: Decimal,
}

impl DeclaredAssets {
    /// Assets minus debts, never below zero.
    pub fn net_wealth(&self) -> Decimal {
        let gross =
            self.bank_accounts + self.securities + self.real_estate + self.vehicles + self.other;
        (gross - self.debts).max(Decimal::ZERO)
    }
}

impl TaxpayerProfile {
    pub fn is_joint(&self) -> bool {
        self.personal.civil_status.is_joint()
    }

    /// Salaries of every earner on the return: the taxpayer, plus the spouse
    /// on a joint return.
    pub fn salaries(&self) -> Vec<Decimal> {
        let mut salaries = vec![self.income.employment_gross];
        if self.is_joint() {
            salaries.push(self.income.spouse_employment_gross);
        }
        salaries
    }

    /// Sum of every income source on the return.
    pub fn gross_income(&self) -> Decimal {
        let income = &self.income;
        let spouse = if self.is_joint() {
            income.spouse_employment_gross
        } else {
            Decimal::ZERO
        };
        income.employment_gross
            + spouse
            + income.self_employment_net.max(Decimal::ZERO)
            + income.rental
            + income.pensions
            + income.unemployment
            + income.other
    }

    /// Rejects any negative amount, and any amount beyond [`MAX_AMOUNT`].
    ///
    /// The form layer is expected to normalise input before it reaches the
    /// engine, so a negative value here is a caller bug. Net self-employment
    /// income is the one amount allowed to be negative (a business loss).
    ///
    /// # Errors
    ///
    /// - [`TaxError::NegativeAmount`] naming the first negative field
    /// - [`TaxError::AmountOutOfRange`] naming the first field whose
    ///   magnitude exceeds [`MAX_AMOUNT`]
    pub fn validate(&self) -> Result<(), TaxError> {
        for (field, value) in self.amounts() {
            if value < Decimal::ZERO {
                return Err(TaxError::NegativeAmount { field, value });
            }
            if value > MAX_AMOUNT {
                return Err(TaxError::AmountOutOfRange { field, value });
            }
        }
        let net = self.income.self_employment_net;
        if net.abs() > MAX_AMOUNT {
            return Err(TaxError::AmountOutOfRange {
                field: "income.self_employment_net",
                value: net,
            });
        }
        Ok(())
    }

    fn amounts(&self) -> [(&'static str, Decimal); 22] {
        let i = &self.income;
        let d = &self.deductions;
        let a = &self.assets;
        [
            ("income.employment_gross", i.employment_gross),
            ("income.spouse_employment_gross", i.spouse_employment_gross),
            ("income.rental", i.rental),
            ("income.pensions", i.pensions),
            ("income.unemployment", i.unemployment),
            ("income.other", i.other),
            ("deductions.public_transport", d.public_transport),
            ("deductions.commute_km", d.commute_km),
            ("deductions.meals", d.meals),
            ("deductions.other_professional", d.other_professional),
            ("deductions.health_insurance", d.health_insurance),
            ("deductions.life_insurance", d.life_insurance),
            ("deductions.pillar_3a", d.pillar_3a),
            ("deductions.spouse_pillar_3a", d.spouse_pillar_3a),
            ("deductions.childcare", d.childcare),
            ("deductions.donations", d.donations),
            ("assets.bank_accounts", a.bank_accounts),
            ("assets.securities", a.securities),
            ("assets.real_estate", a.real_estate),
            ("assets.vehicles", a.vehicles),
            ("assets.other", a.other),
            ("assets.debts", a.debts),
        ]
    }
}
