//! `aucalc batch` subcommand: assess a CSV of inputs.
//!
//! Reads one worksheet input per row (see [`crate::csv_input`] for the
//! column layout), assesses each against the latest year's tables, and
//! writes a results CSV echoing the inputs with the assessment columns
//! appended. Any unreadable row fails the whole run; the CSV error
//! carries the offending row number.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use aucalc_core::calculations::{
    IncomeTaxWorksheet, IncomeTaxWorksheetInput, IncomeTaxWorksheetResult,
};
use aucalc_core::tables;

use crate::csv_input;

/// Arguments for batch assessment.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Input CSV path.
    #[arg(long)]
    pub input: PathBuf,

    /// Output CSV path; results go to stdout when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// One output row: the input columns echoed, assessment columns appended.
#[derive(Debug, Serialize)]
struct ResultRow {
    salary_income: Decimal,
    investment_income: Decimal,
    other_income: Decimal,
    work_deduction: Decimal,
    education_deduction: Decimal,
    donation_deduction: Decimal,
    other_deduction: Decimal,
    apply_lmito: bool,
    extra_offset: Decimal,
    has_help_debt: bool,
    taxable_income: Decimal,
    base_tax: Decimal,
    medicare_levy: Decimal,
    offsets_total: Decimal,
    help_repayment: Decimal,
    final_tax_payable: Decimal,
    net_income: Decimal,
}

fn result_row(
    input: &IncomeTaxWorksheetInput,
    result: &IncomeTaxWorksheetResult,
) -> ResultRow {
    ResultRow {
        salary_income: input.salary_income,
        investment_income: input.investment_income,
        other_income: input.other_income,
        work_deduction: input.work_deduction,
        education_deduction: input.education_deduction,
        donation_deduction: input.donation_deduction,
        other_deduction: input.other_deduction,
        apply_lmito: input.apply_lmito,
        extra_offset: input.extra_offset,
        has_help_debt: input.has_help_debt,
        taxable_income: result.taxable_income,
        base_tax: result.base_tax,
        medicare_levy: result.medicare_levy,
        offsets_total: result.offsets_total,
        help_repayment: result.help_repayment,
        final_tax_payable: result.final_tax_payable,
        net_income: result.net_income,
    }
}

/// Assesses every input against the latest year's tables, in file order.
fn assess_rows(inputs: &[IncomeTaxWorksheetInput]) -> anyhow::Result<Vec<ResultRow>> {
    let tables = tables::latest();
    let worksheet = IncomeTaxWorksheet::new(&tables)?;

    Ok(inputs
        .iter()
        .map(|input| result_row(input, &worksheet.calculate(input)))
        .collect())
}

fn write_csv<W: io::Write>(
    out: W,
    rows: &[ResultRow],
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Runs the batch assessment.
pub fn run(args: &BatchArgs) -> anyhow::Result<()> {
    let inputs = csv_input::load_from_file(&args.input)
        .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", args.input.display()))?;
    let rows = assess_rows(&inputs)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_csv(file, &rows)?;
            info!(rows = rows.len(), output = %path.display(), "batch results written");
        }
        None => write_csv(io::stdout(), &rows)?,
    }
    Ok(())
}
