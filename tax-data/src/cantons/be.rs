//! Canton of Bern, 2024. Income tariffs in cumulative-base form.

use rust_decimal_macros::dec;
use tax_core::{
    Bracket, DeductionPolicy, IncomeTables, InsuranceCaps, Jurisdiction, Municipality,
    ProfessionalExpensePolicy, SpecialDeduction, WealthAllowances,
};

use crate::policy::{BASE_POLICY, STANDARD_PROFESSIONAL};

const INCOME_SINGLE: &[Bracket] = &[
    cumulative!(0, 3100, 1.40, 0),
    cumulative!(3100, 5300, 1.80, 43.40),
    cumulative!(5300, 10400, 2.20, 83.00),
    cumulative!(10400, 18400, 2.70, 195.20),
    cumulative!(18400, 28400, 3.20, 411.20),
    cumulative!(28400, 39700, 3.60, 731.20),
    cumulative!(39700, 51100, 3.90, 1138.00),
    cumulative!(51100, 62800, 4.20, 1582.60),
    cumulative!(62800, 74500, 4.45, 2074.00),
    cumulative!(74500, 86000, 4.60, 2594.65),
    cumulative!(86000, 98000, 4.75, 3123.65),
    cumulative!(98000, 121300, 4.85, 3693.65),
    cumulative!(121300, 156000, 4.95, 4823.70),
    cumulative!(156000, 197600, 5.05, 6541.35),
    cumulative!(197600, .., 5.20, 8642.15),
];

const INCOME_MARRIED: &[Bracket] = &[
    cumulative!(0, 6200, 1.40, 0),
    cumulative!(6200, 10600, 1.80, 86.80),
    cumulative!(10600, 20800, 2.20, 166.00),
    cumulative!(20800, 36800, 2.70, 390.40),
    cumulative!(36800, 56800, 3.20, 822.40),
    cumulative!(56800, 79400, 3.60, 1462.40),
    cumulative!(79400, 102200, 3.90, 2276.00),
    cumulative!(102200, 125600, 4.20, 3165.20),
    cumulative!(125600, 149000, 4.45, 4148.00),
    cumulative!(149000, 172000, 4.60, 5189.30),
    cumulative!(172000, 196000, 4.75, 6247.30),
    cumulative!(196000, 242600, 4.85, 7387.30),
    cumulative!(242600, 312000, 4.95, 9647.40),
    cumulative!(312000, 395200, 5.05, 13082.70),
    cumulative!(395200, .., 5.20, 17284.30),
];

const WEALTH: &[Bracket] = &[
    tranche!(0, 100000, 0.04),
    tranche!(100000, 200000, 0.06),
    tranche!(200000, 500000, 0.08),
    tranche!(500000, 1000000, 0.095),
    tranche!(1000000, 2000000, 0.105),
    tranche!(2000000, .., 0.115),
];

const MUNICIPALITIES: &[Municipality] = &[
    Municipality {
        name: "Bern",
        multiplier: dec!(154),
    },
    Municipality {
        name: "Biel/Bienne",
        multiplier: dec!(163),
    },
    Municipality {
        name: "Thun",
        multiplier: dec!(172),
    },
    Municipality {
        name: "Köniz",
        multiplier: dec!(149),
    },
    Municipality {
        name: "Burgdorf",
        multiplier: dec!(160),
    },
];

const SPECIAL: &[SpecialDeduction] = &[
    SpecialDeduction::DualEarner {
        rate: dec!(50),
        minimum: dec!(0),
        maximum: dec!(9300),
    },
];

pub(crate) const BE: Jurisdiction = Jurisdiction {
    code: "BE",
    name: "Bern",
    cantonal_rate: dec!(302.5),
    income: IncomeTables {
        single: INCOME_SINGLE,
        married: INCOME_MARRIED,
    },
    wealth: WEALTH,
    wealth_allowances: WealthAllowances {
        single: dec!(97000),
        married: dec!(97000),
        per_child: dec!(18000),
    },
    municipalities: MUNICIPALITIES,
    deductions: DeductionPolicy {
        child_deduction: dec!(8300),
        insurance: InsuranceCaps {
            single: dec!(2600),
            married: dec!(5200),
            per_child: dec!(700),
        },
        professional: ProfessionalExpensePolicy {
            transport_cap: dec!(6700),
            standard_rate: dec!(20),
            standard_maximum: dec!(4400),
            ..STANDARD_PROFESSIONAL
        },
        special: SPECIAL,
        ..BASE_POLICY
    },
};
