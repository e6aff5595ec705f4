//! Canton of Vaud, 2024. Income tariffs in cumulative-base form.

use rust_decimal_macros::dec;
use tax_core::{
    Bracket, DeductionPolicy, IncomeTables, InsuranceCaps, Jurisdiction, Municipality,
    ProfessionalExpensePolicy, SpecialDeduction, WealthAllowances,
};

use crate::policy::{BASE_POLICY, STANDARD_PROFESSIONAL};

const INCOME_SINGLE: &[Bracket] = &[
    cumulative!(0, 1600, 0.60, 0),
    cumulative!(1600, 3200, 1.20, 9.60),
    cumulative!(3200, 4800, 1.80, 28.80),
    cumulative!(4800, 7000, 2.40, 57.60),
    cumulative!(7000, 9800, 3.00, 110.40),
    cumulative!(9800, 13600, 3.60, 194.40),
    cumulative!(13600, 18800, 4.20, 331.20),
    cumulative!(18800, 25600, 4.80, 549.60),
    cumulative!(25600, 34600, 5.40, 876.00),
    cumulative!(34600, 46200, 6.00, 1362.00),
    cumulative!(46200, 61000, 6.60, 2058.00),
    cumulative!(61000, 79600, 7.20, 3034.80),
    cumulative!(79600, 102400, 7.80, 4374.00),
    cumulative!(102400, 130000, 8.40, 6152.40),
    cumulative!(130000, 176000, 9.00, 8470.80),
    cumulative!(176000, .., 9.30, 12610.80),
];

const INCOME_MARRIED: &[Bracket] = &[
    cumulative!(0, 2900, 0.60, 0),
    cumulative!(2900, 5800, 1.20, 17.40),
    cumulative!(5800, 8600, 1.80, 52.20),
    cumulative!(8600, 12600, 2.40, 102.60),
    cumulative!(12600, 17600, 3.00, 198.60),
    cumulative!(17600, 24500, 3.60, 348.60),
    cumulative!(24500, 33800, 4.20, 597.00),
    cumulative!(33800, 46100, 4.80, 987.60),
    cumulative!(46100, 62300, 5.40, 1578.00),
    cumulative!(62300, 83200, 6.00, 2452.80),
    cumulative!(83200, 109800, 6.60, 3706.80),
    cumulative!(109800, 143300, 7.20, 5462.40),
    cumulative!(143300, 184300, 7.80, 7874.40),
    cumulative!(184300, 234000, 8.40, 11072.40),
    cumulative!(234000, 316800, 9.00, 15247.20),
    cumulative!(316800, .., 9.30, 22699.20),
];

const WEALTH: &[Bracket] = &[
    tranche!(0, 50000, 0.048),
    tranche!(50000, 100000, 0.096),
    tranche!(100000, 200000, 0.144),
    tranche!(200000, 500000, 0.192),
    tranche!(500000, 1500000, 0.24),
    tranche!(1500000, .., 0.34),
];

const MUNICIPALITIES: &[Municipality] = &[
    Municipality {
        name: "Lausanne",
        multiplier: dec!(78.5),
    },
    Municipality {
        name: "Nyon",
        multiplier: dec!(61),
    },
    Municipality {
        name: "Montreux",
        multiplier: dec!(65),
    },
    Municipality {
        name: "Yverdon-les-Bains",
        multiplier: dec!(76.5),
    },
    Municipality {
        name: "Morges",
        multiplier: dec!(68.5),
    },
];

const SPECIAL: &[SpecialDeduction] = &[
    SpecialDeduction::MarriedCouple { amount: dec!(1300) },
    SpecialDeduction::DualEarner {
        rate: dec!(10),
        minimum: dec!(0),
        maximum: dec!(1700),
    },
    SpecialDeduction::SingleParent { amount: dec!(3500) },
];

pub(crate) const VD: Jurisdiction = Jurisdiction {
    code: "VD",
    name: "Vaud",
    cantonal_rate: dec!(155),
    income: IncomeTables {
        single: INCOME_SINGLE,
        married: INCOME_MARRIED,
    },
    wealth: WEALTH,
    wealth_allowances: WealthAllowances {
        single: dec!(50000),
        married: dec!(100000),
        per_child: dec!(0),
    },
    municipalities: MUNICIPALITIES,
    deductions: DeductionPolicy {
        child_deduction: dec!(7000),
        childcare_cap_per_child: dec!(7100),
        insurance: InsuranceCaps {
            single: dec!(2000),
            married: dec!(4000),
            per_child: dec!(1300),
        },
        professional: ProfessionalExpensePolicy {
            transport_cap: dec!(6000),
            ..STANDARD_PROFESSIONAL
        },
        special: SPECIAL,
        ..BASE_POLICY
    },
};
