//! Home loan repayment worksheet.
//!
//! This module estimates periodic repayments, lifetime cost and a simple
//! equity projection for a fixed-rate home loan.
//!
//! # Worksheet Structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Periodic rate (annual rate / 100 / payments per year) |
//! | 2    | Scheduled repayment (annuity formula, or interest only) |
//! | 3    | Interest-only repayment (principal × periodic rate) |
//! | 4    | Extra principal per period (Line 2 - Line 3, minimum 0) |
//! | 5    | Repayment including any extra amount (Line 2 + extra) |
//! | 6    | Total paid over the term (Line 2 × payment count) |
//! | 7    | Total interest over the term |
//! | 8    | Year-by-year equity and projected property value |
//!
//! The equity projection assumes straight-line principal reduction and a
//! flat 3% yearly growth in property value. It is an illustration, not an
//! amortisation schedule.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use aucalc_core::calculations::{HomeLoanWorksheet, HomeLoanWorksheetInput};
//! use aucalc_core::models::{LoanType, RepaymentFrequency};
//!
//! let input = HomeLoanWorksheetInput {
//!     loan_amount: dec!(600000.00),
//!     annual_rate_percent: dec!(6.0),
//!     term_years: 30,
//!     frequency: RepaymentFrequency::Monthly,
//!     loan_type: LoanType::PrincipalAndInterest,
//!     extra_repayment: dec!(0.00),
//! };
//!
//! let worksheet = HomeLoanWorksheet::new(input).unwrap();
//! let result = worksheet.calculate();
//!
//! assert_eq!(result.repayment, dec!(3597.30));
//! assert_eq!(result.extra_principal, dec!(597.30));
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::models::{LoanType, RepaymentFrequency};

/// Assumed yearly growth in property value for the equity projection.
const PROPERTY_GROWTH_RATE: Decimal = dec!(0.03);

/// Errors raised when loan inputs cannot describe a repayable loan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HomeLoanWorksheetError {
    /// The loan amount must be positive.
    #[error("loan amount must be greater than zero, got {0}")]
    InvalidLoanAmount(Decimal),

    /// The annual interest rate must be a percentage between 0 and 100.
    #[error("annual interest rate must be between 0 and 100 percent, got {0}")]
    InvalidInterestRate(Decimal),

    /// The loan term must be between 1 and 50 years.
    #[error("loan term must be between 1 and 50 years, got {0}")]
    InvalidTerm(u32),
}

/// Input values for a home loan estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeLoanWorksheetInput {
    /// Amount borrowed.
    pub loan_amount: Decimal,

    /// Annual interest rate as a percentage, e.g. `6.0` for 6%.
    pub annual_rate_percent: Decimal,

    /// Loan term in whole years.
    pub term_years: u32,

    /// How often repayments are made.
    pub frequency: RepaymentFrequency,

    /// Principal and interest, or interest only.
    pub loan_type: LoanType,

    /// Voluntary extra amount added to each repayment.
    pub extra_repayment: Decimal,
}

impl HomeLoanWorksheetInput {
    /// Checks that the loan can be repaid over a sensible term.
    ///
    /// # Errors
    ///
    /// Returns [`HomeLoanWorksheetError`] if the loan amount is not
    /// positive, the rate is outside 0 to 100 percent, or the term is
    /// outside 1 to 50 years.
    pub fn validate(&self) -> Result<(), HomeLoanWorksheetError> {
        if self.loan_amount <= Decimal::ZERO {
            return Err(HomeLoanWorksheetError::InvalidLoanAmount(self.loan_amount));
        }
        if self.annual_rate_percent < Decimal::ZERO
            || self.annual_rate_percent > Decimal::ONE_HUNDRED
        {
            return Err(HomeLoanWorksheetError::InvalidInterestRate(
                self.annual_rate_percent,
            ));
        }
        if self.term_years < 1 || self.term_years > 50 {
            return Err(HomeLoanWorksheetError::InvalidTerm(self.term_years));
        }
        Ok(())
    }
}

/// One year of the equity projection (Line 8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityProjectionRow {
    /// Years since settlement, starting at zero.
    pub year: u32,

    /// Principal assumed repaid by this year.
    pub equity: Decimal,

    /// Property value assuming flat yearly growth.
    pub projected_value: Decimal,
}

/// Result of a home loan estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeLoanWorksheetResult {
    /// Scheduled repayment per period (Line 2).
    pub repayment: Decimal,

    /// Interest-only repayment per period (Line 3).
    pub interest_only_repayment: Decimal,

    /// Principal component of each scheduled repayment (Line 4).
    pub extra_principal: Decimal,

    /// Repayment with the voluntary extra amount added (Line 5).
    pub repayment_with_extra: Decimal,

    /// Number of repayments over the full term.
    pub payment_count: u32,

    /// Total paid over the term at the scheduled repayment (Line 6).
    pub total_paid: Decimal,

    /// Total interest over the term (Line 7).
    pub total_interest: Decimal,

    /// Year-by-year equity projection (Line 8).
    pub projection: Vec<EquityProjectionRow>,
}

/// Calculator for a single home loan estimate.
///
/// The worksheet owns its validated input; [`HomeLoanWorksheet::calculate`]
/// has no error paths.
#[derive(Debug, Clone)]
pub struct HomeLoanWorksheet {
    input: HomeLoanWorksheetInput,
}

impl HomeLoanWorksheet {
    /// Creates a worksheet from validated loan inputs.
    ///
    /// # Errors
    ///
    /// Returns [`HomeLoanWorksheetError`] if
    /// [`HomeLoanWorksheetInput::validate`] rejects the input.
    pub fn new(input: HomeLoanWorksheetInput) -> Result<Self, HomeLoanWorksheetError> {
        input.validate()?;
        Ok(Self { input })
    }

    /// Calculates the complete estimate.
    ///
    /// A negative extra repayment is treated as zero with a warning.
    pub fn calculate(&self) -> HomeLoanWorksheetResult {
        let extra_repayment = if self.input.extra_repayment < Decimal::ZERO {
            warn!(
                extra_repayment = %self.input.extra_repayment,
                "negative extra repayment treated as zero"
            );
            Decimal::ZERO
        } else {
            self.input.extra_repayment
        };

        let payments_per_year = self.input.frequency.payments_per_year();
        let payment_count = payments_per_year * self.input.term_years;

        // Line 1: periodic rate, kept unrounded for the annuity formula
        let periodic_rate = self.periodic_rate(payments_per_year);

        // Lines 2 and 3: scheduled and interest-only repayments
        let interest_only_repayment = self.interest_only_repayment(periodic_rate);
        let repayment = match self.input.loan_type {
            LoanType::PrincipalAndInterest => {
                self.amortised_repayment(periodic_rate, payment_count)
            }
            LoanType::InterestOnly => interest_only_repayment,
        };

        // Line 4: principal share of each repayment
        let extra_principal = clamp_non_negative(round_half_up(
            repayment - interest_only_repayment,
        ));

        // Line 5: repayment with the voluntary extra on top
        let repayment_with_extra = round_half_up(repayment + extra_repayment);

        // Lines 6 and 7: lifetime totals at the scheduled repayment
        let total_paid = round_half_up(repayment * Decimal::from(payment_count));
        let total_interest = match self.input.loan_type {
            LoanType::PrincipalAndInterest => round_half_up(total_paid - self.input.loan_amount),
            // Interest-only repayments never touch the principal
            LoanType::InterestOnly => total_paid,
        };

        // Line 8: equity projection
        let projection = self.projection();

        HomeLoanWorksheetResult {
            repayment,
            interest_only_repayment,
            extra_principal,
            repayment_with_extra,
            payment_count,
            total_paid,
            total_interest,
            projection,
        }
    }

    /// Calculates the periodic rate (Line 1).
    fn periodic_rate(
        &self,
        payments_per_year: u32,
    ) -> Decimal {
        self.input.annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(payments_per_year)
    }

    /// Calculates the scheduled principal-and-interest repayment (Line 2).
    ///
    /// Uses the standard annuity formula. A zero rate degenerates to the
    /// principal spread evenly over every payment.
    fn amortised_repayment(
        &self,
        periodic_rate: Decimal,
        payment_count: u32,
    ) -> Decimal {
        if periodic_rate.is_zero() {
            warn!("zero interest rate, spreading principal evenly");
            return round_half_up(self.input.loan_amount / Decimal::from(payment_count));
        }

        let growth = (Decimal::ONE + periodic_rate).powu(u64::from(payment_count));
        round_half_up(
            self.input.loan_amount * periodic_rate * growth / (growth - Decimal::ONE),
        )
    }

    /// Calculates the interest-only repayment (Line 3).
    fn interest_only_repayment(
        &self,
        periodic_rate: Decimal,
    ) -> Decimal {
        round_half_up(self.input.loan_amount * periodic_rate)
    }

    /// Builds the year-by-year equity projection (Line 8).
    ///
    /// Equity grows linearly from zero to the full loan amount over the
    /// term; the property value grows by a flat 3% of the original amount
    /// each year.
    fn projection(&self) -> Vec<EquityProjectionRow> {
        let term = Decimal::from(self.input.term_years);
        (0..=self.input.term_years)
            .map(|year| {
                let elapsed = Decimal::from(year);
                EquityProjectionRow {
                    year,
                    equity: round_half_up(self.input.loan_amount * elapsed / term),
                    projected_value: round_half_up(
                        self.input.loan_amount
                            * (Decimal::ONE + PROPERTY_GROWTH_RATE * elapsed),
                    ),
                }
            })
            .collect()
    }
}
