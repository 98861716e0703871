//! `aucalc tax` subcommand: a single income tax assessment.

use clap::Args;
use rust_decimal::Decimal;

use aucalc_core::calculations::{IncomeTaxWorksheet, IncomeTaxWorksheetInput};
use aucalc_core::tables;

use crate::report;
use crate::utils::parse_money;

/// Arguments for a single income tax assessment.
///
/// Money values accept commas and an optional leading `$`. Negative
/// amounts are treated as zero by the worksheet, with a warning.
#[derive(Debug, Args)]
pub struct TaxArgs {
    /// Annual salary and wages.
    #[arg(long, value_parser = parse_money)]
    pub salary: Decimal,

    /// Interest, dividends and distributions.
    #[arg(long, value_parser = parse_money, default_value = "0")]
    pub investment: Decimal,

    /// Any other assessable income.
    #[arg(long, value_parser = parse_money, default_value = "0")]
    pub other: Decimal,

    /// Work-related expenses.
    #[arg(long, value_parser = parse_money, default_value = "0")]
    pub work_deduction: Decimal,

    /// Self-education expenses.
    #[arg(long, value_parser = parse_money, default_value = "0")]
    pub education_deduction: Decimal,

    /// Gifts and donations to deductible recipients.
    #[arg(long, value_parser = parse_money, default_value = "0")]
    pub donation_deduction: Decimal,

    /// Any other deductions.
    #[arg(long, value_parser = parse_money, default_value = "0")]
    pub other_deduction: Decimal,

    /// Claim the low and middle income tax offset.
    #[arg(long)]
    pub lmito: bool,

    /// Additional offset amount, applied as entered.
    #[arg(long, value_parser = parse_money, default_value = "0")]
    pub extra_offset: Decimal,

    /// Apply the compulsory HELP/HECS repayment.
    #[arg(long)]
    pub help_debt: bool,

    /// Print the input and result as pretty JSON instead of a text report.
    #[arg(long)]
    pub json: bool,
}

impl TaxArgs {
    fn to_input(&self) -> IncomeTaxWorksheetInput {
        IncomeTaxWorksheetInput {
            salary_income: self.salary,
            investment_income: self.investment,
            other_income: self.other,
            work_deduction: self.work_deduction,
            education_deduction: self.education_deduction,
            donation_deduction: self.donation_deduction,
            other_deduction: self.other_deduction,
            apply_lmito: self.lmito,
            extra_offset: self.extra_offset,
            has_help_debt: self.help_debt,
        }
    }
}

/// Runs the assessment and prints the report.
pub fn run(args: &TaxArgs) -> anyhow::Result<()> {
    let tables = tables::latest();
    let worksheet = IncomeTaxWorksheet::new(&tables)?;

    let input = args.to_input();
    let result = worksheet.calculate(&input);

    if args.json {
        println!("{}", report::json_envelope(&input, &result)?);
    } else {
        println!("{}", report::tax_report(&input, &result));
    }
    Ok(())
}
