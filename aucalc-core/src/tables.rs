//! Published rates and thresholds by financial year.
//!
//! A year's tables are a handful of small rows that change at most once a
//! year, so they are kept in code rather than loaded from storage. All
//! figures are for Australian resident individuals.

use rust_decimal_macros::dec;

use crate::models::{FinancialYear, HelpTier, OffsetPhase, TaxBracket, TaxYearTables};

/// Rates and thresholds for the year ending 30 June 2025.
pub fn fy_2024_25() -> TaxYearTables {
    TaxYearTables {
        financial_year: FinancialYear(2025),
        brackets: vec![
            TaxBracket {
                min_income: dec!(0),
                max_income: Some(dec!(18200)),
                tax_rate: dec!(0),
                base_tax: dec!(0),
            },
            TaxBracket {
                min_income: dec!(18200),
                max_income: Some(dec!(45000)),
                tax_rate: dec!(0.19),
                base_tax: dec!(0),
            },
            TaxBracket {
                min_income: dec!(45000),
                max_income: Some(dec!(135000)),
                tax_rate: dec!(0.30),
                base_tax: dec!(5092),
            },
            TaxBracket {
                min_income: dec!(135000),
                max_income: Some(dec!(190000)),
                tax_rate: dec!(0.37),
                base_tax: dec!(32492),
            },
            TaxBracket {
                min_income: dec!(190000),
                max_income: None,
                tax_rate: dec!(0.45),
                base_tax: dec!(52092),
            },
        ],
        medicare_levy_rate: dec!(0.02),
        lito_phases: vec![
            OffsetPhase {
                min_income: dec!(0),
                base_amount: dec!(700),
                taper_rate: dec!(0),
            },
            OffsetPhase {
                min_income: dec!(37500),
                base_amount: dec!(700),
                taper_rate: dec!(-0.05),
            },
            OffsetPhase {
                min_income: dec!(45000),
                base_amount: dec!(325),
                taper_rate: dec!(-0.015),
            },
            OffsetPhase {
                min_income: dec!(66667),
                base_amount: dec!(0),
                taper_rate: dec!(0),
            },
        ],
        lmito_phases: vec![
            OffsetPhase {
                min_income: dec!(0),
                base_amount: dec!(255),
                taper_rate: dec!(0),
            },
            OffsetPhase {
                min_income: dec!(37000),
                base_amount: dec!(255),
                taper_rate: dec!(0.075),
            },
            OffsetPhase {
                min_income: dec!(48000),
                base_amount: dec!(1080),
                taper_rate: dec!(0),
            },
            OffsetPhase {
                min_income: dec!(90000),
                base_amount: dec!(1080),
                taper_rate: dec!(-0.03),
            },
            OffsetPhase {
                min_income: dec!(126000),
                base_amount: dec!(0),
                taper_rate: dec!(0),
            },
        ],
        help_tiers: vec![
            HelpTier { min_income: dec!(51850), rate: dec!(0.010) },
            HelpTier { min_income: dec!(59540), rate: dec!(0.020) },
            HelpTier { min_income: dec!(63230), rate: dec!(0.025) },
            HelpTier { min_income: dec!(67014), rate: dec!(0.030) },
            HelpTier { min_income: dec!(70888), rate: dec!(0.035) },
            HelpTier { min_income: dec!(74960), rate: dec!(0.040) },
            HelpTier { min_income: dec!(79236), rate: dec!(0.045) },
            HelpTier { min_income: dec!(83724), rate: dec!(0.050) },
            HelpTier { min_income: dec!(88432), rate: dec!(0.055) },
            HelpTier { min_income: dec!(93368), rate: dec!(0.060) },
            HelpTier { min_income: dec!(98540), rate: dec!(0.065) },
            HelpTier { min_income: dec!(103857), rate: dec!(0.070) },
            HelpTier { min_income: dec!(109327), rate: dec!(0.075) },
            HelpTier { min_income: dec!(114960), rate: dec!(0.080) },
            HelpTier { min_income: dec!(120767), rate: dec!(0.085) },
            HelpTier { min_income: dec!(126758), rate: dec!(0.090) },
            HelpTier { min_income: dec!(132945), rate: dec!(0.095) },
            HelpTier { min_income: dec!(139340), rate: dec!(0.100) },
        ],
    }
}

/// Returns the tables for a financial year, or `None` for a year without
/// published tables.
pub fn for_year(year: FinancialYear) -> Option<TaxYearTables> {
    match year.0 {
        2025 => Some(fy_2024_25()),
        _ => None,
    }
}

/// The most recent financial year with published tables.
pub fn latest() -> TaxYearTables {
    fy_2024_25()
}
