//! `aucalc loan` subcommand: a single home loan estimate.

use clap::Args;
use rust_decimal::Decimal;

use aucalc_core::calculations::{HomeLoanWorksheet, HomeLoanWorksheetInput};
use aucalc_core::models::{LoanType, RepaymentFrequency};

use crate::report;
use crate::utils::parse_money;

/// Arguments for a single home loan estimate.
#[derive(Debug, Args)]
pub struct LoanArgs {
    /// Amount borrowed.
    #[arg(long, value_parser = parse_money)]
    pub amount: Decimal,

    /// Annual interest rate as a percentage, e.g. 6.0.
    #[arg(long)]
    pub rate: Decimal,

    /// Loan term in whole years.
    #[arg(long)]
    pub years: u32,

    /// Repayment frequency.
    #[arg(long, default_value = "monthly", value_parser = parse_frequency)]
    pub frequency: RepaymentFrequency,

    /// Interest-only repayments instead of principal and interest.
    #[arg(long)]
    pub interest_only: bool,

    /// Voluntary extra amount added to each repayment.
    #[arg(long, value_parser = parse_money, default_value = "0")]
    pub extra: Decimal,

    /// Append the year-by-year equity projection to the report.
    #[arg(long)]
    pub projection: bool,

    /// Print the input and result as pretty JSON instead of a text report.
    #[arg(long)]
    pub json: bool,
}

fn parse_frequency(s: &str) -> Result<RepaymentFrequency, String> {
    RepaymentFrequency::parse(s).ok_or_else(|| {
        let expected: Vec<&str> = RepaymentFrequency::all()
            .iter()
            .map(|frequency| frequency.as_str())
            .collect();
        format!(
            "unrecognised frequency '{s}', expected one of: {}",
            expected.join(", ")
        )
    })
}

impl LoanArgs {
    fn to_input(&self) -> HomeLoanWorksheetInput {
        let loan_type = if self.interest_only {
            LoanType::InterestOnly
        } else {
            LoanType::PrincipalAndInterest
        };
        HomeLoanWorksheetInput {
            loan_amount: self.amount,
            annual_rate_percent: self.rate,
            term_years: self.years,
            frequency: self.frequency,
            loan_type,
            extra_repayment: self.extra,
        }
    }
}

/// Runs the estimate and prints the report.
pub fn run(args: &LoanArgs) -> anyhow::Result<()> {
    let input = args.to_input();
    let worksheet = HomeLoanWorksheet::new(input.clone())?;
    let result = worksheet.calculate();

    if args.json {
        println!("{}", report::json_envelope(&input, &result)?);
    } else {
        println!("{}", report::loan_report(&input, &result, args.projection));
    }
    Ok(())
}
