//! Canton of Zug, 2024.
//!
//! The lowest cantonal rate in the tables; most of the spread between Zug
//! municipalities comes from the communal multiplier.

use rust_decimal_macros::dec;
use tax_core::{
    Bracket, DeductionPolicy, IncomeTables, InsuranceCaps, Jurisdiction, Municipality,
    SpecialDeduction, WealthAllowances,
};

use crate::policy::BASE_POLICY;

const INCOME_SINGLE: &[Bracket] = &[
    tranche!(0, 1100, 0.5),
    tranche!(1100, 3300, 1),
    tranche!(3300, 6000, 2),
    tranche!(6000, 9900, 3),
    tranche!(9900, 20200, 4),
    tranche!(20200, 35500, 5),
    tranche!(35500, 58700, 6),
    tranche!(58700, 96700, 7),
    tranche!(96700, 149800, 8),
    tranche!(149800, 219400, 9),
    tranche!(219400, .., 10),
];

const INCOME_MARRIED: &[Bracket] = &[
    tranche!(0, 2200, 0.5),
    tranche!(2200, 6600, 1),
    tranche!(6600, 12000, 2),
    tranche!(12000, 19800, 3),
    tranche!(19800, 40400, 4),
    tranche!(40400, 71000, 5),
    tranche!(71000, 117400, 6),
    tranche!(117400, 193400, 7),
    tranche!(193400, 299600, 8),
    tranche!(299600, 438800, 9),
    tranche!(438800, .., 10),
];

const WEALTH: &[Bracket] = &[
    tranche!(0, 200000, 0.025),
    tranche!(200000, 400000, 0.05),
    tranche!(400000, 1000000, 0.075),
    tranche!(1000000, .., 0.1),
];

const MUNICIPALITIES: &[Municipality] = &[
    Municipality {
        name: "Zug",
        multiplier: dec!(50),
    },
    Municipality {
        name: "Baar",
        multiplier: dec!(53),
    },
    Municipality {
        name: "Cham",
        multiplier: dec!(56),
    },
    Municipality {
        name: "Steinhausen",
        multiplier: dec!(55),
    },
];

const SPECIAL: &[SpecialDeduction] = &[
    SpecialDeduction::SingleParent { amount: dec!(6000) },
];

pub(crate) const ZG: Jurisdiction = Jurisdiction {
    code: "ZG",
    name: "Zug",
    cantonal_rate: dec!(82),
    income: IncomeTables {
        single: INCOME_SINGLE,
        married: INCOME_MARRIED,
    },
    wealth: WEALTH,
    wealth_allowances: WealthAllowances {
        single: dec!(111100),
        married: dec!(222200),
        per_child: dec!(0),
    },
    municipalities: MUNICIPALITIES,
    deductions: DeductionPolicy {
        child_deduction: dec!(12000),
        insurance: InsuranceCaps {
            single: dec!(3100),
            married: dec!(6200),
            per_child: dec!(1000),
        },
        special: SPECIAL,
        ..BASE_POLICY
    },
};
