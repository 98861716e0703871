//! Income tax assessment worksheet for Australian resident individuals.
//!
//! This module estimates a year's income tax position from annual income
//! and deduction figures, using the rate tables published for that year.
//!
//! # Worksheet Structure
//!
//! The assessment consists of the following lines:
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Total assessable income (salary + investment + other) |
//! | 2    | Total deductions (work + self-education + donations + other) |
//! | 3    | Taxable income (Line 1 - Line 2, minimum 0) |
//! | 4    | Base tax from the resident rate schedule |
//! | 5    | Medicare levy (Line 3 × levy rate) |
//! | 6    | Offsets (LITO + LMITO if elected + any extra offset) |
//! | 7    | Study loan repayment (Line 3 × HELP rate, if a debt exists) |
//! | 8    | Tax payable (Line 4 + Line 5 + Line 7 - Line 6, minimum 0) |
//! | 9    | Net income (Line 1 - Line 8) |
//!
//! Negative money inputs are treated as zero rather than rejected, so
//! [`IncomeTaxWorksheet::calculate`] produces a result for every input.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use aucalc_core::calculations::{IncomeTaxWorksheet, IncomeTaxWorksheetInput};
//! use aucalc_core::tables;
//!
//! let tables = tables::fy_2024_25();
//! let worksheet = IncomeTaxWorksheet::new(&tables).unwrap();
//!
//! let input = IncomeTaxWorksheetInput {
//!     salary_income: dec!(95000.00),
//!     investment_income: dec!(5200.00),
//!     other_income: dec!(0.00),
//!     work_deduction: dec!(3200.00),
//!     education_deduction: dec!(900.00),
//!     donation_deduction: dec!(300.00),
//!     other_deduction: dec!(0.00),
//!     apply_lmito: true,
//!     extra_offset: dec!(0.00),
//!     has_help_debt: true,
//! };
//!
//! let result = worksheet.calculate(&input);
//!
//! assert_eq!(result.taxable_income, dec!(95800.00));
//! assert_eq!(result.base_tax, dec!(20332.00));
//! assert_eq!(result.final_tax_payable, dec!(27090.00));
//! assert_eq!(result.net_income, dec!(73110.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::models::{FinancialYear, OffsetPhase, TaxYearTables};

/// Errors raised when the rate tables handed to the worksheet are malformed.
///
/// All checks run once at construction; a worksheet that was built
/// successfully never fails to calculate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxWorksheetError {
    /// No tax brackets were provided.
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    /// The first bracket must cover income from zero.
    #[error("first tax bracket must start at zero income, got {0}")]
    FirstBracketMustStartAtZero(Decimal),

    /// Brackets must be sorted by ascending minimum income.
    #[error("tax brackets must be sorted by minimum income; {0} is out of order")]
    BracketsOutOfOrder(Decimal),

    /// Each bracket must begin where the previous one ends.
    #[error("tax bracket starting at {0} does not continue from the previous bracket")]
    BracketsNotContiguous(Decimal),

    /// The last bracket must cover all remaining income.
    #[error("last tax bracket must be open ended, got maximum income {0}")]
    LastBracketMustBeOpenEnded(Decimal),

    /// A bracket's marginal rate is outside [0, 1].
    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidTaxRate(Decimal),

    /// The Medicare levy rate is outside [0, 1].
    #[error("medicare levy rate must be between 0 and 1, got {0}")]
    InvalidMedicareLevyRate(Decimal),

    /// A non-empty offset schedule must cover income from zero.
    #[error("first offset phase must start at zero income, got {0}")]
    FirstPhaseMustStartAtZero(Decimal),

    /// Offset phases must be sorted by ascending minimum income.
    #[error("offset phases must be sorted by minimum income; {0} is out of order")]
    PhasesOutOfOrder(Decimal),

    /// Repayment tiers must be sorted by ascending minimum income.
    #[error("repayment tiers must be sorted by minimum income; {0} is out of order")]
    HelpTiersOutOfOrder(Decimal),

    /// A repayment tier rate is outside [0, 1].
    #[error("repayment rate must be between 0 and 1, got {0}")]
    InvalidHelpRate(Decimal),
}

/// Input values for an income tax assessment.
///
/// Amounts are annual dollar figures. Negative amounts are treated as zero
/// during calculation rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxWorksheetInput {
    /// Gross salary and wages.
    pub salary_income: Decimal,

    /// Interest, dividends and distributions.
    pub investment_income: Decimal,

    /// Any other assessable income.
    pub other_income: Decimal,

    /// Work-related expenses.
    pub work_deduction: Decimal,

    /// Self-education expenses.
    pub education_deduction: Decimal,

    /// Gifts and donations to deductible recipients.
    pub donation_deduction: Decimal,

    /// Any other deductions.
    pub other_deduction: Decimal,

    /// Whether to claim the low and middle income tax offset.
    pub apply_lmito: bool,

    /// Any additional offset amount, applied as entered.
    pub extra_offset: Decimal,

    /// Whether a HELP/HECS study loan balance remains.
    pub has_help_debt: bool,
}

/// Result of an income tax assessment.
///
/// Every worksheet line is carried for transparency, rounded to whole
/// cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxWorksheetResult {
    /// The financial year the rate tables belong to.
    pub financial_year: FinancialYear,

    /// Total assessable income (Line 1).
    pub total_income: Decimal,

    /// Total deductions (Line 2).
    pub total_deductions: Decimal,

    /// Taxable income (Line 3).
    pub taxable_income: Decimal,

    /// Base tax from the rate schedule (Line 4).
    pub base_tax: Decimal,

    /// Medicare levy (Line 5).
    pub medicare_levy: Decimal,

    /// Low income tax offset component of Line 6.
    pub lito: Decimal,

    /// Low and middle income tax offset component of Line 6.
    /// Zero when not elected.
    pub lmito: Decimal,

    /// Total offsets (Line 6).
    pub offsets_total: Decimal,

    /// Compulsory study loan repayment (Line 7).
    pub help_repayment: Decimal,

    /// Tax payable after offsets, floored at zero (Line 8).
    pub final_tax_payable: Decimal,

    /// Income left after tax (Line 9).
    pub net_income: Decimal,
}

/// Calculator for a single year's income tax assessment.
///
/// The worksheet borrows a set of rate tables and validates their shape
/// once at construction. [`IncomeTaxWorksheet::calculate`] is then total:
/// every input produces a result, with no further error paths.
#[derive(Debug, Clone)]
pub struct IncomeTaxWorksheet<'a> {
    tables: &'a TaxYearTables,
}

impl<'a> IncomeTaxWorksheet<'a> {
    /// Creates a worksheet over validated rate tables.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxWorksheetError`] if the brackets are empty, out
    /// of order, not contiguous, not anchored at zero, or not open ended;
    /// if any rate is outside [0, 1]; or if an offset or repayment
    /// schedule is out of order.
    pub fn new(tables: &'a TaxYearTables) -> Result<Self, IncomeTaxWorksheetError> {
        Self::validate_tables(tables)?;
        debug!(financial_year = %tables.financial_year, "income tax worksheet ready");
        Ok(Self { tables })
    }

    /// Calculates the complete assessment for one set of inputs.
    ///
    /// Negative money inputs are clamped to zero with a warning. The
    /// calculation itself has no error paths and no side effects beyond
    /// those warnings.
    pub fn calculate(
        &self,
        input: &IncomeTaxWorksheetInput,
    ) -> IncomeTaxWorksheetResult {
        let salary_income = self.clamp_amount("salary_income", input.salary_income);
        let investment_income = self.clamp_amount("investment_income", input.investment_income);
        let other_income = self.clamp_amount("other_income", input.other_income);
        let work_deduction = self.clamp_amount("work_deduction", input.work_deduction);
        let education_deduction =
            self.clamp_amount("education_deduction", input.education_deduction);
        let donation_deduction = self.clamp_amount("donation_deduction", input.donation_deduction);
        let other_deduction = self.clamp_amount("other_deduction", input.other_deduction);
        let extra_offset = self.clamp_amount("extra_offset", input.extra_offset);

        // Lines 1 and 2: assessable income and deductions
        let total_income = self.total_income(salary_income, investment_income, other_income);
        let total_deductions = self.total_deductions(
            work_deduction,
            education_deduction,
            donation_deduction,
            other_deduction,
        );

        // Line 3: taxable income
        let taxable_income = self.taxable_income(total_income, total_deductions);

        // Line 4: base tax from the rate schedule
        let base_tax = self.base_tax(taxable_income);

        // Line 5: medicare levy
        let medicare_levy = self.medicare_levy(taxable_income);

        // Line 6: offsets
        let lito = self.lito(taxable_income);
        let lmito = self.lmito(taxable_income, input.apply_lmito);
        let offsets_total = self.offsets_total(lito, lmito, extra_offset);

        // Line 7: study loan repayment
        let help_repayment = self.help_repayment(taxable_income, input.has_help_debt);

        // Line 8: tax payable, floored at zero
        let final_tax_payable =
            self.final_tax_payable(base_tax, medicare_levy, help_repayment, offsets_total);

        // Line 9: what is left of the income
        let net_income = self.net_income(total_income, final_tax_payable);

        IncomeTaxWorksheetResult {
            financial_year: self.tables.financial_year,
            total_income,
            total_deductions,
            taxable_income,
            base_tax,
            medicare_levy,
            lito,
            lmito,
            offsets_total,
            help_repayment,
            final_tax_payable,
            net_income,
        }
    }

    fn validate_tables(tables: &TaxYearTables) -> Result<(), IncomeTaxWorksheetError> {
        let brackets = &tables.brackets;
        if brackets.is_empty() {
            return Err(IncomeTaxWorksheetError::NoTaxBrackets);
        }
        let first_min = brackets[0].min_income;
        if !first_min.is_zero() {
            return Err(IncomeTaxWorksheetError::FirstBracketMustStartAtZero(
                first_min,
            ));
        }
        for pair in brackets.windows(2) {
            if pair[1].min_income <= pair[0].min_income {
                return Err(IncomeTaxWorksheetError::BracketsOutOfOrder(
                    pair[1].min_income,
                ));
            }
            if pair[0].max_income != Some(pair[1].min_income) {
                return Err(IncomeTaxWorksheetError::BracketsNotContiguous(
                    pair[1].min_income,
                ));
            }
        }
        if let Some(max) = brackets.last().and_then(|b| b.max_income) {
            return Err(IncomeTaxWorksheetError::LastBracketMustBeOpenEnded(max));
        }
        for bracket in brackets {
            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(IncomeTaxWorksheetError::InvalidTaxRate(bracket.tax_rate));
            }
        }
        if tables.medicare_levy_rate < Decimal::ZERO || tables.medicare_levy_rate > Decimal::ONE {
            return Err(IncomeTaxWorksheetError::InvalidMedicareLevyRate(
                tables.medicare_levy_rate,
            ));
        }
        Self::validate_phases(&tables.lito_phases)?;
        Self::validate_phases(&tables.lmito_phases)?;
        for pair in tables.help_tiers.windows(2) {
            if pair[1].min_income <= pair[0].min_income {
                return Err(IncomeTaxWorksheetError::HelpTiersOutOfOrder(
                    pair[1].min_income,
                ));
            }
        }
        for tier in &tables.help_tiers {
            if tier.rate < Decimal::ZERO || tier.rate > Decimal::ONE {
                return Err(IncomeTaxWorksheetError::InvalidHelpRate(tier.rate));
            }
        }
        Ok(())
    }

    /// An empty schedule is a year without the offset; a non-empty one
    /// must be sorted and anchored at zero income.
    fn validate_phases(phases: &[OffsetPhase]) -> Result<(), IncomeTaxWorksheetError> {
        if let Some(first) = phases.first() {
            if !first.min_income.is_zero() {
                return Err(IncomeTaxWorksheetError::FirstPhaseMustStartAtZero(
                    first.min_income,
                ));
            }
        }
        for pair in phases.windows(2) {
            if pair[1].min_income <= pair[0].min_income {
                return Err(IncomeTaxWorksheetError::PhasesOutOfOrder(
                    pair[1].min_income,
                ));
            }
        }
        Ok(())
    }

    /// Treats a negative money input as zero.
    fn clamp_amount(
        &self,
        field: &'static str,
        value: Decimal,
    ) -> Decimal {
        if value < Decimal::ZERO {
            warn!(field, value = %value, "negative amount treated as zero");
            return Decimal::ZERO;
        }
        value
    }

    /// Calculates total assessable income (Line 1).
    fn total_income(
        &self,
        salary_income: Decimal,
        investment_income: Decimal,
        other_income: Decimal,
    ) -> Decimal {
        round_half_up(salary_income + investment_income + other_income)
    }

    /// Calculates total deductions (Line 2).
    fn total_deductions(
        &self,
        work_deduction: Decimal,
        education_deduction: Decimal,
        donation_deduction: Decimal,
        other_deduction: Decimal,
    ) -> Decimal {
        round_half_up(work_deduction + education_deduction + donation_deduction + other_deduction)
    }

    /// Calculates taxable income (Line 3).
    fn taxable_income(
        &self,
        total_income: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        clamp_non_negative(round_half_up(total_income - total_deductions))
    }

    /// Calculates base tax from the rate schedule (Line 4).
    ///
    /// The bracket with the highest minimum strictly below the income
    /// applies, so an income sitting exactly on a boundary is still taxed
    /// under the bracket it closes. The published base constants are not
    /// continuous at every boundary, which makes the distinction matter.
    fn base_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let bracket = self
            .tables
            .brackets
            .iter()
            .rev()
            .find(|b| b.min_income < taxable_income);

        match bracket {
            Some(b) => {
                let marginal_income = taxable_income - b.min_income;
                round_half_up(b.base_tax + marginal_income * b.tax_rate)
            }
            None => Decimal::ZERO,
        }
    }

    /// Calculates the Medicare levy (Line 5).
    fn medicare_levy(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        round_half_up(taxable_income * self.tables.medicare_levy_rate)
    }

    /// Calculates the low income tax offset component of Line 6.
    fn lito(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        self.offset_amount(&self.tables.lito_phases, taxable_income)
    }

    /// Calculates the low and middle income tax offset component of Line 6.
    fn lmito(
        &self,
        taxable_income: Decimal,
        apply_lmito: bool,
    ) -> Decimal {
        if !apply_lmito {
            return Decimal::ZERO;
        }
        self.offset_amount(&self.tables.lmito_phases, taxable_income)
    }

    /// Evaluates a piecewise-linear offset schedule at an income.
    ///
    /// The phase with the highest minimum at or below the income applies,
    /// and the tapered amount is floored at zero so a taper can never turn
    /// the offset into extra tax.
    fn offset_amount(
        &self,
        phases: &[OffsetPhase],
        taxable_income: Decimal,
    ) -> Decimal {
        let phase = phases
            .iter()
            .rev()
            .find(|p| p.min_income <= taxable_income);

        match phase {
            Some(p) => {
                let amount = p.base_amount + (taxable_income - p.min_income) * p.taper_rate;
                clamp_non_negative(round_half_up(amount))
            }
            None => Decimal::ZERO,
        }
    }

    /// Calculates total offsets (Line 6).
    fn offsets_total(
        &self,
        lito: Decimal,
        lmito: Decimal,
        extra_offset: Decimal,
    ) -> Decimal {
        round_half_up(lito + lmito + extra_offset)
    }

    /// Calculates the compulsory study loan repayment (Line 7).
    ///
    /// The tier rate applies to the whole taxable income rather than the
    /// amount above the threshold. Below the first threshold no repayment
    /// is due.
    fn help_repayment(
        &self,
        taxable_income: Decimal,
        has_help_debt: bool,
    ) -> Decimal {
        if !has_help_debt {
            return Decimal::ZERO;
        }

        let rate = self
            .tables
            .help_tiers
            .iter()
            .rev()
            .find(|t| t.min_income <= taxable_income)
            .map(|t| t.rate)
            .unwrap_or(Decimal::ZERO);

        round_half_up(taxable_income * rate)
    }

    /// Calculates tax payable (Line 8).
    ///
    /// Offsets are non-refundable, so the result is floored at zero.
    fn final_tax_payable(
        &self,
        base_tax: Decimal,
        medicare_levy: Decimal,
        help_repayment: Decimal,
        offsets_total: Decimal,
    ) -> Decimal {
        clamp_non_negative(round_half_up(
            base_tax + medicare_levy + help_repayment - offsets_total,
        ))
    }

    /// Calculates net income (Line 9).
    fn net_income(
        &self,
        total_income: Decimal,
        final_tax_payable: Decimal,
    ) -> Decimal {
        round_half_up(total_income - final_tax_payable)
    }
}
