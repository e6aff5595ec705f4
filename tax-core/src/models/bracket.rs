use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One contiguous income range of a progressive tariff.
///
/// `from` is inclusive and `to` exclusive; the last bracket of a table is
/// unbounded (`to == None`). `rate` is a percentage, so `2.64` means 2.64 %.
///
/// A bracket carrying `base` is in cumulative-base form: `base` is the total
/// tax owed at `from`. Without `base` the bracket is a plain tranche and tax
/// is summed over every tranche the amount spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub from: Decimal,
    pub to: Option<Decimal>,
    pub rate: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Decimal>,
}

impl Bracket {
    /// A tranche-form bracket (no precomputed base).
    pub const fn tranche(
        from: Decimal,
        to: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            from,
            to,
            rate,
            base: None,
        }
    }

    /// A cumulative-base bracket; `base` is the tax owed at `from`.
    pub const fn cumulative(
        from: Decimal,
        to: Option<Decimal>,
        rate: Decimal,
        base: Decimal,
    ) -> Self {
        Self {
            from,
            to,
            rate,
            base: Some(base),
        }
    }

    /// Whether `amount` falls inside `[from, to)`.
    pub fn contains(
        &self,
        amount: Decimal,
    ) -> bool {
        amount >= self.from && self.to.is_none_or(|to| amount < to)
    }

    /// Which encoding this bracket uses.
    pub fn encoding(&self) -> BracketEncoding {
        match self.base {
            Some(_) => BracketEncoding::CumulativeBase,
            None => BracketEncoding::Tranche,
        }
    }
}

/// The two bracket-table shapes found in the rate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketEncoding {
    Tranche,
    CumulativeBase,
}
