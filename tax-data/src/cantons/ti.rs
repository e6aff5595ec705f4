//! Canton of Ticino, 2024.

use rust_decimal_macros::dec;
use tax_core::{
    Bracket, DeductionPolicy, IncomeTables, InsuranceCaps, Jurisdiction, Municipality,
    ProfessionalExpensePolicy, SpecialDeduction, WealthAllowances,
};

use crate::policy::{BASE_POLICY, STANDARD_PROFESSIONAL};

const INCOME_SINGLE: &[Bracket] = &[
    tranche!(0, 12500, 0),
    tranche!(12500, 15000, 2),
    tranche!(15000, 18000, 4),
    tranche!(18000, 22000, 6),
    tranche!(22000, 28000, 8),
    tranche!(28000, 38000, 9.5),
    tranche!(38000, 48000, 10.5),
    tranche!(48000, 58000, 11.5),
    tranche!(58000, 78000, 12.5),
    tranche!(78000, 110000, 13.5),
    tranche!(110000, 160000, 14.5),
    tranche!(160000, 220000, 15),
    tranche!(220000, .., 15.5),
];

const INCOME_MARRIED: &[Bracket] = &[
    tranche!(0, 20000, 0),
    tranche!(20000, 24000, 2),
    tranche!(24000, 28800, 4),
    tranche!(28800, 35200, 6),
    tranche!(35200, 44800, 8),
    tranche!(44800, 60800, 9.5),
    tranche!(60800, 76800, 10.5),
    tranche!(76800, 92800, 11.5),
    tranche!(92800, 124800, 12.5),
    tranche!(124800, 176000, 13.5),
    tranche!(176000, 256000, 14.5),
    tranche!(256000, 352000, 15),
    tranche!(352000, .., 15.5),
];

const WEALTH: &[Bracket] = &[
    tranche!(0, 200000, 0.1),
    tranche!(200000, 400000, 0.15),
    tranche!(400000, 600000, 0.2),
    tranche!(600000, 800000, 0.25),
    tranche!(800000, 1000000, 0.3),
    tranche!(1000000, .., 0.35),
];

const MUNICIPALITIES: &[Municipality] = &[
    Municipality {
        name: "Lugano",
        multiplier: dec!(77),
    },
    Municipality {
        name: "Bellinzona",
        multiplier: dec!(93),
    },
    Municipality {
        name: "Locarno",
        multiplier: dec!(87),
    },
    Municipality {
        name: "Mendrisio",
        multiplier: dec!(80),
    },
];

const SPECIAL: &[SpecialDeduction] = &[
    SpecialDeduction::MarriedCouple { amount: dec!(11100) },
];

pub(crate) const TI: Jurisdiction = Jurisdiction {
    code: "TI",
    name: "Ticino",
    cantonal_rate: dec!(97),
    income: IncomeTables {
        single: INCOME_SINGLE,
        married: INCOME_MARRIED,
    },
    wealth: WEALTH,
    wealth_allowances: WealthAllowances {
        single: dec!(200000),
        married: dec!(400000),
        per_child: dec!(0),
    },
    municipalities: MUNICIPALITIES,
    deductions: DeductionPolicy {
        child_deduction: dec!(11100),
        childcare_cap_per_child: dec!(5500),
        insurance: InsuranceCaps {
            single: dec!(5300),
            married: dec!(10300),
            per_child: dec!(2600),
        },
        professional: ProfessionalExpensePolicy {
            transport_cap: dec!(3000),
            standard_minimum: dec!(2500),
            floor: dec!(2500),
            ..STANDARD_PROFESSIONAL
        },
        special: SPECIAL,
        ..BASE_POLICY
    },
};
