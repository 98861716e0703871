use serde::{Deserialize, Serialize};

/// Whether repayments retire principal or cover interest only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    PrincipalAndInterest,
    InterestOnly,
}

impl LoanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrincipalAndInterest => "principal-and-interest",
            Self::InterestOnly => "interest-only",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "principal-and-interest" => Some(Self::PrincipalAndInterest),
            "interest-only" => Some(Self::InterestOnly),
            _ => None,
        }
    }
}
