//! Calculation modules for the annual assessment and home loan worksheets.
//!
//! This module provides the calculation logic for income tax assessments
//! and home loan repayment estimates, organized as worksheets over shared
//! rounding helpers.

pub mod common;
pub mod worksheets;

pub use worksheets::{
    EquityProjectionRow, HomeLoanWorksheet, HomeLoanWorksheetError, HomeLoanWorksheetInput,
    HomeLoanWorksheetResult, IncomeTaxWorksheet, IncomeTaxWorksheetError, IncomeTaxWorksheetInput,
    IncomeTaxWorksheetResult,
};
