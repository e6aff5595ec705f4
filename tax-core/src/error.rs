use rust_decimal::Decimal;
use thiserror::Error;

/// Every way a tax computation can fail.
///
/// None of these are transient; a failure aborts the whole computation and
/// no partial result is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaxError {
    /// Malformed static rate data. A bug in the tables, not a user error.
    #[error("invalid bracket table: {0}")]
    InvalidBracketTable(#[from] BracketTableError),

    /// The canton code is not present in the rate tables.
    #[error("unknown canton '{0}'")]
    UnknownCanton(String),

    /// The canton exists but does not list this municipality.
    #[error("unknown municipality '{municipality}' in canton {canton}")]
    UnknownMunicipality {
        canton: String,
        municipality: String,
    },

    /// No rate tables are compiled in for this year.
    #[error("no rate tables for tax year {0}")]
    UnsupportedTaxYear(i32),

    /// A negative income, deduction or amount reached the engine.
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// An amount too large for the engine's decimal arithmetic.
    #[error("{field} is out of range, got {value}")]
    AmountOutOfRange { field: &'static str, value: Decimal },

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}

/// The ordering or coverage invariant a bracket table breaks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("table has no brackets")]
    Empty,

    #[error("first bracket starts at {0}, expected 0")]
    DoesNotStartAtZero(Decimal),

    #[error("gap between bracket {index} (ends {to}) and the next (starts {next_from})")]
    Gap {
        index: usize,
        to: Decimal,
        next_from: Decimal,
    },

    #[error("bracket {index} (ends {to}) overlaps the next (starts {next_from})")]
    Overlap {
        index: usize,
        to: Decimal,
        next_from: Decimal,
    },

    #[error("bracket {index} is empty or inverted")]
    EmptyBracket { index: usize },

    #[error("bracket {index} is unbounded but is not the last bracket")]
    UnboundedBeforeLast { index: usize },

    #[error("last bracket ends at {0}; it must be unbounded")]
    BoundedLast(Decimal),

    #[error("bracket {index} has negative rate {rate}")]
    NegativeRate { index: usize, rate: Decimal },

    #[error("bracket {index} mixes tranche and cumulative-base encodings")]
    MixedEncoding { index: usize },

    #[error("first bracket declares base {0}, expected 0")]
    NonZeroFirstBase(Decimal),

    #[error("bracket {index} declares base {base}, below the previous base {previous}")]
    DecreasingBase {
        index: usize,
        base: Decimal,
        previous: Decimal,
    },

    #[error("tranche sum overflows at bracket {index}")]
    BaseOverflow { index: usize },

    #[error("bracket {index} declares base {declared}, tranche sum gives {derived}")]
    BaseMismatch {
        index: usize,
        declared: Decimal,
        derived: Decimal,
    },
}
