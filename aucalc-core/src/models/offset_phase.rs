use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One phase of a piecewise-linear tax offset.
///
/// The phase with the highest `min_income` at or below taxable income
/// applies, and its amount is `base_amount + (income - min_income) *
/// taper_rate`, floored at zero. A negative taper phases the offset out;
/// a positive taper ramps it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPhase {
    pub min_income: Decimal,
    pub base_amount: Decimal,
    pub taper_rate: Decimal,
}
