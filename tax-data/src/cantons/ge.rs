//! Republic and Canton of Geneva, 2024.
//!
//! The cumulative tariff already yields the cantonal tax, so the cantonal
//! rate is 100 and only the communal centimes vary.

use rust_decimal_macros::dec;
use tax_core::{
    Bracket, DeductionPolicy, IncomeTables, InsuranceCaps, Jurisdiction, Municipality,
    ProfessionalExpensePolicy, SpecialDeduction, WealthAllowances,
};

use crate::policy::{BASE_POLICY, STANDARD_PROFESSIONAL};

const INCOME_SINGLE: &[Bracket] = &[
    cumulative!(0, 18479, 0, 0),
    cumulative!(18479, 22264, 8, 0),
    cumulative!(22264, 24491, 9, 302.80),
    cumulative!(24491, 26717, 10, 503.23),
    cumulative!(26717, 28943, 11, 725.83),
    cumulative!(28943, 34509, 12, 970.69),
    cumulative!(34509, 38962, 13, 1638.61),
    cumulative!(38962, 43416, 14, 2217.50),
    cumulative!(43416, 47868, 14.5, 2841.06),
    cumulative!(47868, 76811, 15, 3486.60),
    cumulative!(76811, 125793, 15.5, 7828.05),
    cumulative!(125793, 169208, 16, 15420.26),
    cumulative!(169208, 191473, 16.5, 22366.66),
    cumulative!(191473, 273850, 17, 26040.38),
    cumulative!(273850, 291661, 17.5, 40044.48),
    cumulative!(291661, 410775, 18, 43161.40),
    cumulative!(410775, 621570, 18.5, 64601.92),
    cumulative!(621570, .., 19, 103599.00),
];

const INCOME_MARRIED: &[Bracket] = &[
    cumulative!(0, 36958, 0, 0),
    cumulative!(36958, 44528, 8, 0),
    cumulative!(44528, 48982, 9, 605.60),
    cumulative!(48982, 53434, 10, 1006.46),
    cumulative!(53434, 57886, 11, 1451.66),
    cumulative!(57886, 69018, 12, 1941.38),
    cumulative!(69018, 77924, 13, 3277.22),
    cumulative!(77924, 86832, 14, 4435.00),
    cumulative!(86832, 95736, 14.5, 5682.12),
    cumulative!(95736, 153622, 15, 6973.20),
    cumulative!(153622, 251586, 15.5, 15656.10),
    cumulative!(251586, 338416, 16, 30840.52),
    cumulative!(338416, 382946, 16.5, 44733.32),
    cumulative!(382946, 547700, 17, 52080.77),
    cumulative!(547700, 583322, 17.5, 80088.95),
    cumulative!(583322, 821550, 18, 86322.80),
    cumulative!(821550, 1243140, 18.5, 129203.84),
    cumulative!(1243140, .., 19, 207197.99),
];

const WEALTH: &[Bracket] = &[
    tranche!(0, 111059, 0.175),
    tranche!(111059, 222117, 0.225),
    tranche!(222117, 333176, 0.275),
    tranche!(333176, 444234, 0.3),
    tranche!(444234, 666351, 0.325),
    tranche!(666351, 888468, 0.35),
    tranche!(888468, 1110585, 0.375),
    tranche!(1110585, 1665878, 0.4),
    tranche!(1665878, .., 0.45),
];

const MUNICIPALITIES: &[Municipality] = &[
    Municipality {
        name: "Genève",
        multiplier: dec!(45.49),
    },
    Municipality {
        name: "Carouge",
        multiplier: dec!(39),
    },
    Municipality {
        name: "Vernier",
        multiplier: dec!(50),
    },
    Municipality {
        name: "Lancy",
        multiplier: dec!(46),
    },
    Municipality {
        name: "Meyrin",
        multiplier: dec!(44),
    },
    Municipality {
        name: "Cologny",
        multiplier: dec!(27),
    },
];

const SPECIAL: &[SpecialDeduction] = &[
    SpecialDeduction::DualEarner {
        rate: dec!(0),
        minimum: dec!(1000),
        maximum: dec!(1000),
    },
];

pub(crate) const GE: Jurisdiction = Jurisdiction {
    code: "GE",
    name: "Genève",
    cantonal_rate: dec!(100),
    income: IncomeTables {
        single: INCOME_SINGLE,
        married: INCOME_MARRIED,
    },
    wealth: WEALTH,
    wealth_allowances: WealthAllowances {
        single: dec!(86833),
        married: dec!(173666),
        per_child: dec!(43417),
    },
    municipalities: MUNICIPALITIES,
    deductions: DeductionPolicy {
        child_deduction: dec!(13536),
        childcare_cap_per_child: dec!(26080),
        insurance: InsuranceCaps {
            single: dec!(16207),
            married: dec!(32414),
            per_child: dec!(4768),
        },
        professional: ProfessionalExpensePolicy {
            transport_cap: dec!(529),
            standard_minimum: dec!(634),
            standard_maximum: dec!(1726),
            floor: dec!(634),
            ..STANDARD_PROFESSIONAL
        },
        special: SPECIAL,
        ..BASE_POLICY
    },
};
