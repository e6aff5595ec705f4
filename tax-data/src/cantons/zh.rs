//! Canton of Zürich, 2024.
//!
//! Simple tax tariff in tranche form. The cantonal rate of 98% and the
//! communal multipliers both apply to the simple tax.

use rust_decimal_macros::dec;
use tax_core::{
    Bracket, DeductionPolicy, IncomeTables, InsuranceCaps, Jurisdiction, Municipality,
    ProfessionalExpensePolicy, SpecialDeduction, WealthAllowances,
};

use crate::policy::{BASE_POLICY, STANDARD_PROFESSIONAL};

const INCOME_SINGLE: &[Bracket] = &[
    tranche!(0, 6900, 0),
    tranche!(6900, 11800, 2),
    tranche!(11800, 16600, 3),
    tranche!(16600, 24500, 4),
    tranche!(24500, 34100, 5),
    tranche!(34100, 45100, 6),
    tranche!(45100, 58000, 7),
    tranche!(58000, 75400, 8),
    tranche!(75400, 109000, 9),
    tranche!(109000, 142200, 10),
    tranche!(142200, 194900, 11),
    tranche!(194900, 263300, 12),
    tranche!(263300, .., 13),
];

const INCOME_MARRIED: &[Bracket] = &[
    tranche!(0, 13900, 0),
    tranche!(13900, 20200, 2),
    tranche!(20200, 27900, 3),
    tranche!(27900, 37000, 4),
    tranche!(37000, 47400, 5),
    tranche!(47400, 59400, 6),
    tranche!(59400, 73100, 7),
    tranche!(73100, 108800, 8),
    tranche!(108800, 143000, 9),
    tranche!(143000, 189500, 10),
    tranche!(189500, 271900, 11),
    tranche!(271900, 378000, 12),
    tranche!(378000, .., 13),
];

const WEALTH: &[Bracket] = &[
    tranche!(0, 238000, 0.05),
    tranche!(238000, 635000, 0.1),
    tranche!(635000, 1192000, 0.15),
    tranche!(1192000, 1907000, 0.2),
    tranche!(1907000, 2702000, 0.25),
    tranche!(2702000, .., 0.3),
];

const MUNICIPALITIES: &[Municipality] = &[
    Municipality {
        name: "Zürich",
        multiplier: dec!(119),
    },
    Municipality {
        name: "Winterthur",
        multiplier: dec!(125),
    },
    Municipality {
        name: "Uster",
        multiplier: dec!(106),
    },
    Municipality {
        name: "Küsnacht",
        multiplier: dec!(73),
    },
    Municipality {
        name: "Dietikon",
        multiplier: dec!(118),
    },
];

const SPECIAL: &[SpecialDeduction] = &[
    SpecialDeduction::DualEarner {
        rate: dec!(0),
        minimum: dec!(5900),
        maximum: dec!(5900),
    },
];

pub(crate) const ZH: Jurisdiction = Jurisdiction {
    code: "ZH",
    name: "Zürich",
    cantonal_rate: dec!(98),
    income: IncomeTables {
        single: INCOME_SINGLE,
        married: INCOME_MARRIED,
    },
    wealth: WEALTH,
    wealth_allowances: WealthAllowances {
        single: dec!(80000),
        married: dec!(159000),
        per_child: dec!(0),
    },
    municipalities: MUNICIPALITIES,
    deductions: DeductionPolicy {
        child_deduction: dec!(9300),
        insurance: InsuranceCaps {
            single: dec!(2900),
            married: dec!(5800),
            per_child: dec!(1300),
        },
        professional: ProfessionalExpensePolicy {
            transport_cap: dec!(5000),
            ..STANDARD_PROFESSIONAL
        },
        special: SPECIAL,
        ..BASE_POLICY
    },
};
