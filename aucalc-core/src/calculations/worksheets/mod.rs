//! Worksheet implementations.
//!
//! Each worksheet validates its tables or inputs once at construction and
//! then calculates without further error paths.

pub mod home_loan;
pub mod income_tax;

pub use home_loan::{
    EquityProjectionRow, HomeLoanWorksheet, HomeLoanWorksheetError, HomeLoanWorksheetInput,
    HomeLoanWorksheetResult,
};
pub use income_tax::{
    IncomeTaxWorksheet, IncomeTaxWorksheetError, IncomeTaxWorksheetInput,
    IncomeTaxWorksheetResult,
};
