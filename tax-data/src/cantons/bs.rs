//! Canton of Basel-Stadt, 2024.
//!
//! Two-bracket flat tariff. The city of Basel levies no communal income tax
//! of its own, hence the zero multiplier.

use rust_decimal_macros::dec;
use tax_core::{
    Bracket, DeductionPolicy, IncomeTables, InsuranceCaps, Jurisdiction, Municipality,
    ProfessionalExpensePolicy, SpecialDeduction, WealthAllowances,
};

use crate::policy::{BASE_POLICY, STANDARD_PROFESSIONAL};

const INCOME_SINGLE: &[Bracket] = &[
    tranche!(0, 200000, 21),
    tranche!(200000, .., 27.25),
];

const INCOME_MARRIED: &[Bracket] = &[
    tranche!(0, 400000, 21),
    tranche!(400000, .., 27.25),
];

const WEALTH: &[Bracket] = &[
    tranche!(0, 300000, 0.45),
    tranche!(300000, 800000, 0.55),
    tranche!(800000, 2000000, 0.65),
    tranche!(2000000, .., 0.79),
];

const MUNICIPALITIES: &[Municipality] = &[
    Municipality {
        name: "Basel",
        multiplier: dec!(0),
    },
    Municipality {
        name: "Riehen",
        multiplier: dec!(40),
    },
    Municipality {
        name: "Bettingen",
        multiplier: dec!(35),
    },
];

const SPECIAL: &[SpecialDeduction] = &[
    SpecialDeduction::MarriedCouple { amount: dec!(18000) },
];

pub(crate) const BS: Jurisdiction = Jurisdiction {
    code: "BS",
    name: "Basel-Stadt",
    cantonal_rate: dec!(100),
    income: IncomeTables {
        single: INCOME_SINGLE,
        married: INCOME_MARRIED,
    },
    wealth: WEALTH,
    wealth_allowances: WealthAllowances {
        single: dec!(75000),
        married: dec!(150000),
        per_child: dec!(25000),
    },
    municipalities: MUNICIPALITIES,
    deductions: DeductionPolicy {
        personal_deduction: dec!(18000),
        child_deduction: dec!(7800),
        insurance: InsuranceCaps {
            single: dec!(2400),
            married: dec!(4800),
            per_child: dec!(1200),
        },
        professional: ProfessionalExpensePolicy {
            transport_cap: dec!(3000),
            ..STANDARD_PROFESSIONAL
        },
        special: SPECIAL,
        ..BASE_POLICY
    },
};
