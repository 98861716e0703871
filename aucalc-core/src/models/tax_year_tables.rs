use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FinancialYear, HelpTier, OffsetPhase, TaxBracket};

/// The full set of published rates and thresholds for one financial year.
///
/// Tables are plain data; shape checks happen when a worksheet is built
/// from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearTables {
    pub financial_year: FinancialYear,
    pub brackets: Vec<TaxBracket>,
    pub medicare_levy_rate: Decimal,
    pub lito_phases: Vec<OffsetPhase>,
    pub lmito_phases: Vec<OffsetPhase>,
    pub help_tiers: Vec<HelpTier>,
}
