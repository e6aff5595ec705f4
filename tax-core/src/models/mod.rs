mod bracket;
mod civil_status;
mod deduction_policy;
mod jurisdiction;
mod tax_result;
mod tax_year_tables;
mod taxpayer_profile;

pub use bracket::{Bracket, BracketEncoding};
pub use civil_status::{CivilStatus, Tariff};
pub use deduction_policy::{
    DeductionPolicy, DonationPolicy, InsuranceCaps, Pillar3aCeilings, ProfessionalExpensePolicy,
    SocialInsuranceRates, SpecialDeduction,
};
pub use jurisdiction::{FederalTables, IncomeTables, Jurisdiction, Municipality, WealthAllowances};
pub use tax_result::{CantonComparison, DeductionBreakdown, MarginalRates, TaxResult, TaxableIncome};
pub use tax_year_tables::TaxYearTables;
pub use taxpayer_profile::{
    DeclaredAssets, DeclaredDeductions, Employment, IncomeSources, PersonalInfo, TaxpayerProfile,
};
