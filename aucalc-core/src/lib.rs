pub mod calculations;
pub mod models;
pub mod tables;

pub use calculations::{HomeLoanWorksheet, IncomeTaxWorksheet};
pub use models::*;
