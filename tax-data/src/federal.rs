//! Direct federal tax, 2024.
//!
//! Both tariffs are published in cumulative-base form; the bases are the
//! official figures rounded to centimes.

use rust_decimal_macros::dec;
use tax_core::{
    Bracket, DeductionPolicy, FederalTables, IncomeTables, InsuranceCaps,
    ProfessionalExpensePolicy, SpecialDeduction,
};

use crate::policy::{BASE_POLICY, STANDARD_PROFESSIONAL};

const INCOME_SINGLE: &[Bracket] = &[
    cumulative!(0, 14500, 0, 0),
    cumulative!(14500, 31600, 0.77, 0),
    cumulative!(31600, 41400, 0.88, 131.67),
    cumulative!(41400, 55200, 2.64, 217.91),
    cumulative!(55200, 72500, 2.97, 582.23),
    cumulative!(72500, 78100, 5.94, 1096.04),
    cumulative!(78100, 103600, 6.60, 1428.68),
    cumulative!(103600, 134600, 8.80, 3111.68),
    cumulative!(134600, 176000, 11.00, 5839.68),
    cumulative!(176000, 755200, 13.20, 10393.68),
    cumulative!(755200, .., 11.50, 86848.08),
];

const INCOME_MARRIED: &[Bracket] = &[
    cumulative!(0, 28300, 0, 0),
    cumulative!(28300, 50900, 1, 0),
    cumulative!(50900, 58400, 2, 226),
    cumulative!(58400, 75300, 3, 376),
    cumulative!(75300, 90300, 4, 883),
    cumulative!(90300, 103400, 5, 1483),
    cumulative!(103400, 114700, 6, 2138),
    cumulative!(114700, 124200, 7, 2816),
    cumulative!(124200, 131700, 8, 3481),
    cumulative!(131700, 137300, 9, 4081),
    cumulative!(137300, 141200, 10, 4585),
    cumulative!(141200, 143100, 11, 4975),
    cumulative!(143100, 145000, 12, 5184),
    cumulative!(145000, 895900, 13, 5412),
    cumulative!(895900, .., 11.5, 103029),
];

const SPECIAL: &[SpecialDeduction] = &[
    SpecialDeduction::MarriedCouple { amount: dec!(2800) },
    SpecialDeduction::DualEarner {
        rate: dec!(50),
        minimum: dec!(8600),
        maximum: dec!(14100),
    },
];

pub(crate) const FEDERAL: FederalTables = FederalTables {
    income: IncomeTables {
        single: INCOME_SINGLE,
        married: INCOME_MARRIED,
    },
    deductions: DeductionPolicy {
        child_deduction: dec!(6700),
        insurance: InsuranceCaps {
            single: dec!(1800),
            married: dec!(3600),
            per_child: dec!(700),
        },
        professional: ProfessionalExpensePolicy {
            transport_cap: dec!(3200),
            ..STANDARD_PROFESSIONAL
        },
        childcare_cap_per_child: dec!(25500),
        special: SPECIAL,
        ..BASE_POLICY
    },
};
