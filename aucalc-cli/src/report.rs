//! Text and JSON report rendering for terminal output.
//!
//! Text reports are fixed-width line layouts; JSON reports wrap the input
//! and result together so a run can be replayed from its own output.

use chrono::Local;
use rust_decimal::Decimal;
use serde::Serialize;

use aucalc_core::calculations::{
    HomeLoanWorksheetInput, HomeLoanWorksheetResult, IncomeTaxWorksheetInput,
    IncomeTaxWorksheetResult,
};

use crate::utils::format_currency;

/// Total character width of a report line.
const REPORT_WIDTH: usize = 44;

// ---------------------------------------------------------------------------
// Line helpers
// ---------------------------------------------------------------------------

/// A label with a right-aligned money amount.
fn money_line(
    label: &str,
    amount: Decimal,
) -> String {
    text_line(label, &format_currency(amount))
}

/// A label with a right-aligned plain value.
fn text_line(
    label: &str,
    value: &str,
) -> String {
    let pad = REPORT_WIDTH.saturating_sub(label.len());
    format!("{label}{value:>pad$}")
}

/// A full-width separator line.
fn separator() -> String {
    "─".repeat(REPORT_WIDTH)
}

/// The `Prepared <date>` line stamped on every report.
fn prepared_line() -> String {
    format!("Prepared {}", Local::now().format("%Y-%m-%d"))
}

// ---------------------------------------------------------------------------
// JSON envelope
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct Envelope<'a, I, R> {
    input: &'a I,
    result: &'a R,
}

/// Renders an input and its result as pretty-printed JSON.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialisation fails.
pub fn json_envelope<I, R>(
    input: &I,
    result: &R,
) -> Result<String, serde_json::Error>
where
    I: Serialize,
    R: Serialize,
{
    serde_json::to_string_pretty(&Envelope { input, result })
}

// ---------------------------------------------------------------------------
// Income tax report
// ---------------------------------------------------------------------------

/// Renders an income tax assessment as a fixed-width text report.
pub fn tax_report(
    input: &IncomeTaxWorksheetInput,
    result: &IncomeTaxWorksheetResult,
) -> String {
    let mut lines = vec![
        format!("Income Tax Assessment {}", result.financial_year),
        prepared_line(),
        separator(),
        money_line("Total income", result.total_income),
        money_line("Total deductions", result.total_deductions),
        money_line("Taxable income", result.taxable_income),
        separator(),
        money_line("Base tax", result.base_tax),
        money_line("Medicare levy", result.medicare_levy),
    ];
    if input.has_help_debt {
        lines.push(money_line("HELP repayment", result.help_repayment));
    }
    lines.push(money_line("Low income offset", result.lito));
    if input.apply_lmito {
        lines.push(money_line("Low and middle offset", result.lmito));
    }
    lines.push(money_line("Total offsets", result.offsets_total));
    lines.push(separator());
    lines.push(money_line("Tax payable", result.final_tax_payable));
    lines.push(money_line("Net income", result.net_income));
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Home loan report
// ---------------------------------------------------------------------------

/// Renders a home loan estimate as a fixed-width text report.
///
/// The equity projection table is appended when `show_projection` is set.
pub fn loan_report(
    input: &HomeLoanWorksheetInput,
    result: &HomeLoanWorksheetResult,
    show_projection: bool,
) -> String {
    let mut lines = vec![
        "Home Loan Estimate".to_string(),
        prepared_line(),
        separator(),
        money_line("Loan amount", input.loan_amount),
        text_line("Interest rate", &format!("{}%", input.annual_rate_percent)),
        text_line("Term", &format!("{} years", input.term_years)),
        text_line("Frequency", input.frequency.as_str()),
        text_line("Loan type", input.loan_type.as_str()),
        separator(),
        money_line("Repayment", result.repayment),
        money_line("Interest only", result.interest_only_repayment),
        money_line("Principal component", result.extra_principal),
    ];
    if input.extra_repayment > Decimal::ZERO {
        lines.push(money_line("With extra", result.repayment_with_extra));
    }
    lines.push(separator());
    lines.push(text_line("Payments", &result.payment_count.to_string()));
    lines.push(money_line("Total paid", result.total_paid));
    lines.push(money_line("Total interest", result.total_interest));

    if show_projection {
        lines.push(separator());
        lines.push(format!(
            "{:<6}{:>18}{:>20}",
            "Year", "Equity", "Projected value"
        ));
        for row in &result.projection {
            lines.push(format!(
                "{:<6}{:>18}{:>20}",
                row.year,
                format_currency(row.equity),
                format_currency(row.projected_value),
            ));
        }
    }

    lines.join("\n")
}
