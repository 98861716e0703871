mod financial_year;
mod help_tier;
mod loan_type;
mod offset_phase;
mod repayment_frequency;
mod tax_bracket;
mod tax_year_tables;

pub use financial_year::FinancialYear;
pub use help_tier::HelpTier;
pub use loan_type::LoanType;
pub use offset_phase::OffsetPhase;
pub use repayment_frequency::RepaymentFrequency;
pub use tax_bracket::TaxBracket;
pub use tax_year_tables::TaxYearTables;
