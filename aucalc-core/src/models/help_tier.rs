use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of the study loan repayment schedule.
///
/// The tier with the highest `min_income` at or below taxable income sets
/// the repayment rate, and the rate applies to the whole taxable income
/// rather than the amount above the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpTier {
    pub min_income: Decimal,
    pub rate: Decimal,
}
