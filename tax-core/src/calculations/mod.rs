//! Tax calculation modules.
//!
//! Each module is a pure function of its inputs: the bracket calculator,
//! the deduction aggregator, the marginal-rate estimator and the wealth-tax
//! calculator. The orchestration lives in [`crate::engine`].

pub mod brackets;
pub mod common;
pub mod deductions;
pub mod marginal;
pub mod wealth;

pub use brackets::{
    compute_bracket_tax, derive_bases, to_cumulative, top_rate, validate_brackets, verify_bases,
};
pub use common::{
    MAX_AMOUNT, apply_multiplier, checked_percent_of, clamp, percent_of, round_half_up,
};
pub use deductions::{
    DeductionAggregator, DeductionCategory, DeductionItem, DeductionKind, DeductionSummary,
    ProfessionalExpenses, aggregate_all, aggregate_deductions, reconcile,
};
pub use marginal::{DEFAULT_MARGINAL_INCREMENT, estimate_marginal_rate};
pub use wealth::{WealthTaxResult, compute_wealth_tax};
