use serde::{Deserialize, Serialize};

/// How often loan repayments are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentFrequency {
    Monthly,
    Fortnightly,
    Weekly,
}

impl RepaymentFrequency {
    pub fn payments_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::Fortnightly => 26,
            Self::Weekly => 52,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Fortnightly => "fortnightly",
            Self::Weekly => "weekly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(Self::Monthly),
            "fortnightly" => Some(Self::Fortnightly),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Monthly, Self::Fortnightly, Self::Weekly]
    }
}
