//! Canton of Lucerne, 2024.

use rust_decimal_macros::dec;
use tax_core::{
    Bracket, DeductionPolicy, IncomeTables, InsuranceCaps, Jurisdiction, Municipality,
    ProfessionalExpensePolicy, SpecialDeduction, WealthAllowances,
};

use crate::policy::{BASE_POLICY, STANDARD_PROFESSIONAL};

const INCOME_SINGLE: &[Bracket] = &[
    tranche!(0, 11100, 0),
    tranche!(11100, 13200, 0.5),
    tranche!(13200, 15300, 1),
    tranche!(15300, 17400, 2),
    tranche!(17400, 20500, 3),
    tranche!(20500, 24700, 3.5),
    tranche!(24700, 29900, 4),
    tranche!(29900, 43400, 4.5),
    tranche!(43400, 64100, 5),
    tranche!(64100, 118000, 5.5),
    tranche!(118000, .., 5.6),
];

const INCOME_MARRIED: &[Bracket] = &[
    tranche!(0, 22200, 0),
    tranche!(22200, 26400, 0.5),
    tranche!(26400, 30600, 1),
    tranche!(30600, 34800, 2),
    tranche!(34800, 41000, 3),
    tranche!(41000, 49400, 3.5),
    tranche!(49400, 59800, 4),
    tranche!(59800, 86800, 4.5),
    tranche!(86800, 128200, 5),
    tranche!(128200, 236000, 5.5),
    tranche!(236000, .., 5.6),
];

const WEALTH: &[Bracket] = &[
    tranche!(0, .., 0.075),
];

const MUNICIPALITIES: &[Municipality] = &[
    Municipality {
        name: "Luzern",
        multiplier: dec!(175),
    },
    Municipality {
        name: "Kriens",
        multiplier: dec!(190),
    },
    Municipality {
        name: "Emmen",
        multiplier: dec!(205),
    },
    Municipality {
        name: "Horw",
        multiplier: dec!(165),
    },
];

const SPECIAL: &[SpecialDeduction] = &[
    SpecialDeduction::DualEarner {
        rate: dec!(50),
        minimum: dec!(0),
        maximum: dec!(4700),
    },
];

pub(crate) const LU: Jurisdiction = Jurisdiction {
    code: "LU",
    name: "Luzern",
    cantonal_rate: dec!(160),
    income: IncomeTables {
        single: INCOME_SINGLE,
        married: INCOME_MARRIED,
    },
    wealth: WEALTH,
    wealth_allowances: WealthAllowances {
        single: dec!(80000),
        married: dec!(160000),
        per_child: dec!(0),
    },
    municipalities: MUNICIPALITIES,
    deductions: DeductionPolicy {
        child_deduction: dec!(6700),
        insurance: InsuranceCaps {
            single: dec!(2600),
            married: dec!(5200),
            per_child: dec!(700),
        },
        professional: ProfessionalExpensePolicy {
            transport_cap: dec!(6000),
            ..STANDARD_PROFESSIONAL
        },
        special: SPECIAL,
        ..BASE_POLICY
    },
};
