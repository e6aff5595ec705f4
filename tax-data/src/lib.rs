//! Compiled-in Swiss rate tables.
//!
//! [`CompiledRateTables`] carries the direct federal tax and eight cantons
//! (ZH, BE, LU, ZG, BS, VD, GE, TI) for tax year 2024, and implements
//! [`tax_core::RateTableSource`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{TaxEngine, TaxpayerProfile};
//! use tax_data::CompiledRateTables;
//!
//! let tables = CompiledRateTables::new();
//! let engine = TaxEngine::new(&tables);
//!
//! let mut profile = TaxpayerProfile::default();
//! profile.personal.canton = "GE".to_string();
//! profile.income.employment_gross = dec!(85000);
//!
//! let result = engine.compute_tax(&profile, 2024).unwrap();
//! assert_eq!(result.municipality, "Genève");
//! assert!(result.total_tax > dec!(0));
//! ```

/// `tranche!(from, to, rate)`; `..` as `to` marks the unbounded top bracket.
macro_rules! tranche {
    ($from:tt, .., $rate:tt) => {
        ::tax_core::Bracket::tranche(
            ::rust_decimal_macros::dec!($from),
            None,
            ::rust_decimal_macros::dec!($rate),
        )
    };
    ($from:tt, $to:tt, $rate:tt) => {
        ::tax_core::Bracket::tranche(
            ::rust_decimal_macros::dec!($from),
            Some(::rust_decimal_macros::dec!($to)),
            ::rust_decimal_macros::dec!($rate),
        )
    };
}

/// `cumulative!(from, to, rate, base)`; `..` as `to` marks the top bracket.
macro_rules! cumulative {
    ($from:tt, .., $rate:tt, $base:tt) => {
        ::tax_core::Bracket::cumulative(
            ::rust_decimal_macros::dec!($from),
            None,
            ::rust_decimal_macros::dec!($rate),
            ::rust_decimal_macros::dec!($base),
        )
    };
    ($from:tt, $to:tt, $rate:tt, $base:tt) => {
        ::tax_core::Bracket::cumulative(
            ::rust_decimal_macros::dec!($from),
            Some(::rust_decimal_macros::dec!($to)),
            ::rust_decimal_macros::dec!($rate),
            ::rust_decimal_macros::dec!($base),
        )
    };
}

mod cantons;
mod federal;
pub mod policy;
mod store;
pub mod table_csv;

pub use store::{BASE_TOLERANCE, CompiledRateTables, TABLES_2024, TableIssue};
pub use table_csv::{BracketCsvError, BracketRecord, TableReport, parse_brackets};
