//! Small hand-checkable rate tables shared by the unit tests.

use rust_decimal_macros::dec;

use crate::models::{
    Bracket, DeductionPolicy, DonationPolicy, FederalTables, IncomeTables, InsuranceCaps,
    Jurisdiction, Municipality, Pillar3aCeilings, ProfessionalExpensePolicy,
    SocialInsuranceRates, SpecialDeduction, TaxYearTables, WealthAllowances,
};
use crate::source::RateTableSource;

pub(crate) const FIXTURE_YEAR: i32 = 2024;

/// 5% AHV, 1% ALV, no pension. Keeps totals easy to compute by hand.
const SOCIAL: SocialInsuranceRates = SocialInsuranceRates {
    ahv_rate: dec!(5),
    alv_rate: dec!(1),
    alv_ceiling: dec!(148200),
    pension_rate: dec!(0),
    pension_coordination_deduction: dec!(25725),
    pension_max_coordinated_salary: dec!(62475),
    self_employed_ahv_rate: dec!(10),
};

pub(crate) const FEDERAL_POLICY: DeductionPolicy = DeductionPolicy {
    personal_deduction: dec!(0),
    child_deduction: dec!(5000),
    insurance: InsuranceCaps {
        single: dec!(2000),
        married: dec!(4000),
        per_child: dec!(500),
    },
    professional: ProfessionalExpensePolicy {
        transport_cap: dec!(3000),
        meals_per_day: dec!(15),
        rate_per_km: dec!(0.70),
        working_days: 220,
        standard_rate: dec!(3),
        standard_minimum: dec!(2000),
        standard_maximum: dec!(4000),
        floor: dec!(2000),
    },
    pillar_3a: Pillar3aCeilings {
        employed: dec!(7056),
        self_employed: dec!(35280),
        self_employed_income_share: dec!(20),
    },
    childcare_cap_per_child: dec!(10000),
    donations: DonationPolicy {
        minimum: dec!(100),
        max_share_of_income: dec!(20),
    },
    social: SOCIAL,
    special: &[SpecialDeduction::MarriedCouple { amount: dec!(2000) }],
};

const CANTONAL_POLICY: DeductionPolicy = DeductionPolicy {
    child_deduction: dec!(8000),
    special: &[],
    ..FEDERAL_POLICY
};

/// Federal: 10% above 20,000 single / 40,000 married.
pub(crate) const FEDERAL: FederalTables = FederalTables {
    income: IncomeTables {
        single: &[
            Bracket::tranche(dec!(0), Some(dec!(20000)), dec!(0)),
            Bracket::tranche(dec!(20000), None, dec!(10)),
        ],
        married: &[
            Bracket::tranche(dec!(0), Some(dec!(40000)), dec!(0)),
            Bracket::tranche(dec!(40000), None, dec!(10)),
        ],
    },
    deductions: FEDERAL_POLICY,
};

/// "AA": tranche tables, cantonal rate 100.
pub(crate) const TRANCHE_CANTON: Jurisdiction = Jurisdiction {
    code: "AA",
    name: "Alpha",
    cantonal_rate: dec!(100),
    income: IncomeTables {
        single: &[
            Bracket::tranche(dec!(0), Some(dec!(10000)), dec!(0)),
            Bracket::tranche(dec!(10000), None, dec!(5)),
        ],
        married: &[
            Bracket::tranche(dec!(0), Some(dec!(20000)), dec!(0)),
            Bracket::tranche(dec!(20000), None, dec!(5)),
        ],
    },
    wealth: &[Bracket::tranche(dec!(0), None, dec!(0.5))],
    wealth_allowances: WealthAllowances {
        single: dec!(100000),
        married: dec!(200000),
        per_child: dec!(0),
    },
    municipalities: &[
        Municipality {
            name: "Alphaville",
            multiplier: dec!(100),
        },
        Municipality {
            name: "Bétaz",
            multiplier: dec!(50),
        },
    ],
    deductions: CANTONAL_POLICY,
};

/// "BB": cumulative-base tables, cantonal rate 200.
pub(crate) const CUMULATIVE_CANTON: Jurisdiction = Jurisdiction {
    code: "BB",
    name: "Beta",
    cantonal_rate: dec!(200),
    income: IncomeTables {
        single: &[
            Bracket::cumulative(dec!(0), Some(dec!(10000)), dec!(0), dec!(0)),
            Bracket::cumulative(dec!(10000), Some(dec!(50000)), dec!(2), dec!(0)),
            Bracket::cumulative(dec!(50000), None, dec!(4), dec!(800)),
        ],
        married: &[
            Bracket::cumulative(dec!(0), Some(dec!(20000)), dec!(0), dec!(0)),
            Bracket::cumulative(dec!(20000), Some(dec!(100000)), dec!(2), dec!(0)),
            Bracket::cumulative(dec!(100000), None, dec!(4), dec!(1600)),
        ],
    },
    wealth: &[
        Bracket::tranche(dec!(0), Some(dec!(500000)), dec!(0.1)),
        Bracket::tranche(dec!(500000), None, dec!(0.2)),
    ],
    wealth_allowances: WealthAllowances {
        single: dec!(50000),
        married: dec!(100000),
        per_child: dec!(10000),
    },
    municipalities: &[Municipality {
        name: "Gamma",
        multiplier: dec!(80),
    }],
    deductions: CANTONAL_POLICY,
};

pub(crate) static FIXTURE_TABLES: TaxYearTables = TaxYearTables {
    tax_year: FIXTURE_YEAR,
    federal: FEDERAL,
    cantons: &[TRANCHE_CANTON, CUMULATIVE_CANTON],
};

pub(crate) struct FixtureSource;

impl RateTableSource for FixtureSource {
    fn tax_year(
        &self,
        year: i32,
    ) -> Option<&TaxYearTables> {
        (year == FIXTURE_YEAR).then_some(&FIXTURE_TABLES)
    }

    fn available_years(&self) -> Vec<i32> {
        vec![FIXTURE_YEAR]
    }
}
