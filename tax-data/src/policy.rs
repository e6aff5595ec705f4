//! Deduction constants shared by every 2024 policy.

use rust_decimal_macros::dec;
use tax_core::{
    DeductionPolicy, DonationPolicy, InsuranceCaps, Pillar3aCeilings, ProfessionalExpensePolicy,
    SocialInsuranceRates,
};

/// Employee contribution rates for 2024.
pub const SOCIAL_INSURANCE_2024: SocialInsuranceRates = SocialInsuranceRates {
    ahv_rate: dec!(5.3),
    alv_rate: dec!(1.1),
    alv_ceiling: dec!(148200),
    pension_rate: dec!(5),
    pension_coordination_deduction: dec!(25725),
    pension_max_coordinated_salary: dec!(62475),
    self_employed_ahv_rate: dec!(10),
};

/// "Small" ceiling with a pension fund, "large" ceiling without one.
pub const PILLAR_3A_2024: Pillar3aCeilings = Pillar3aCeilings {
    employed: dec!(7056),
    self_employed: dec!(35280),
    self_employed_income_share: dec!(20),
};

pub(crate) const STANDARD_PROFESSIONAL: ProfessionalExpensePolicy = ProfessionalExpensePolicy {
    transport_cap: dec!(3000),
    meals_per_day: dec!(15),
    rate_per_km: dec!(0.70),
    working_days: 220,
    standard_rate: dec!(3),
    standard_minimum: dec!(2000),
    standard_maximum: dec!(4000),
    floor: dec!(2000),
};

/// Starting point for cantonal policies; each canton overrides its own amounts.
pub(crate) const BASE_POLICY: DeductionPolicy = DeductionPolicy {
    personal_deduction: dec!(0),
    child_deduction: dec!(0),
    insurance: InsuranceCaps {
        single: dec!(0),
        married: dec!(0),
        per_child: dec!(0),
    },
    professional: STANDARD_PROFESSIONAL,
    pillar_3a: PILLAR_3A_2024,
    childcare_cap_per_child: dec!(25000),
    donations: DonationPolicy {
        minimum: dec!(100),
        max_share_of_income: dec!(20),
    },
    social: SOCIAL_INSURANCE_2024,
    special: &[],
};
