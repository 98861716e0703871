use std::fmt;

use serde::{Deserialize, Serialize};

/// An Australian financial year, named by the calendar year it ends in.
///
/// `FinancialYear(2025)` runs from 1 July 2024 to 30 June 2025 and displays
/// as `2024-25`.
///
/// # Example
///
/// ```
/// use aucalc_core::FinancialYear;
///
/// assert_eq!(FinancialYear(2025).to_string(), "2024-25");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FinancialYear(pub i32);

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0 - 1, self.0.rem_euclid(100))
    }
}
