use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CivilStatus {
    #[default]
    Single,
    Married,
    RegisteredPartnership,
    Divorced,
    Widowed,
}

impl CivilStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::Married => "M",
            Self::RegisteredPartnership => "RP",
            Self::Divorced => "D",
            Self::Widowed => "W",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "S" => Some(Self::Single),
            "M" => Some(Self::Married),
            "RP" => Some(Self::RegisteredPartnership),
            "D" => Some(Self::Divorced),
            "W" => Some(Self::Widowed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Married => "Married",
            Self::RegisteredPartnership => "Registered partnership",
            Self::Divorced => "Divorced",
            Self::Widowed => "Widowed",
        }
    }

    /// Couples file a joint return and are taxed on the married tariff.
    pub fn is_joint(&self) -> bool {
        matches!(self, Self::Married | Self::RegisteredPartnership)
    }

    pub fn tariff(&self) -> Tariff {
        if self.is_joint() {
            Tariff::Married
        } else {
            Tariff::Single
        }
    }
}

/// Which income bracket table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tariff {
    Single,
    Married,
}
