//! CSV loader for batch income tax assessments.
//!
//! ## CSV Format
//!
//! The expected CSV format uses the following columns. Column order does **not**
//! matter (headers are matched by name). All header names are case-sensitive
//! and must match exactly.
//!
//! | Column                | Required | Type    | Notes                              |
//! |-----------------------|----------|---------|------------------------------------|
//! | `salary_income`       | yes      | decimal | e.g. `95000.00`                    |
//! | `investment_income`   | no       | decimal | Empty cell means `0`               |
//! | `other_income`        | no       | decimal | Empty cell means `0`               |
//! | `work_deduction`      | no       | decimal | Empty cell means `0`               |
//! | `education_deduction` | no       | decimal | Empty cell means `0`               |
//! | `donation_deduction`  | no       | decimal | Empty cell means `0`               |
//! | `other_deduction`     | no       | decimal | Empty cell means `0`               |
//! | `apply_lmito`         | no       | boolean | `true`/`false`, empty means `false`|
//! | `extra_offset`        | no       | decimal | Empty cell means `0`               |
//! | `has_help_debt`       | no       | boolean | `true`/`false`, empty means `false`|
//!
//! Negative amounts are accepted here and treated as zero by the worksheet,
//! which logs a warning for each one.
//!
//! ### Minimal example
//!
//! ```csv
//! salary_income
//! 95000.00
//! ```
//!
//! ### Full example
//!
//! ```csv
//! salary_income,investment_income,other_income,work_deduction,education_deduction,donation_deduction,other_deduction,apply_lmito,extra_offset,has_help_debt
//! 95000.00,5200.00,0.00,3200.00,900.00,300.00,0.00,true,0.00,true
//! ```
use rust_decimal::Decimal;
use serde::Deserialize;

use aucalc_core::calculations::IncomeTaxWorksheetInput;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    salary_income: Decimal,
    investment_income: Option<Decimal>,
    other_income: Option<Decimal>,
    work_deduction: Option<Decimal>,
    education_deduction: Option<Decimal>,
    donation_deduction: Option<Decimal>,
    other_deduction: Option<Decimal>,
    apply_lmito: Option<bool>,
    extra_offset: Option<Decimal>,
    has_help_debt: Option<bool>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a worksheet input, filling defaults.
fn convert_row(row: CsvRow) -> IncomeTaxWorksheetInput {
    IncomeTaxWorksheetInput {
        salary_income: row.salary_income,
        investment_income: row.investment_income.unwrap_or(Decimal::ZERO),
        other_income: row.other_income.unwrap_or(Decimal::ZERO),
        work_deduction: row.work_deduction.unwrap_or(Decimal::ZERO),
        education_deduction: row.education_deduction.unwrap_or(Decimal::ZERO),
        donation_deduction: row.donation_deduction.unwrap_or(Decimal::ZERO),
        other_deduction: row.other_deduction.unwrap_or(Decimal::ZERO),
        apply_lmito: row.apply_lmito.unwrap_or(false),
        extra_offset: row.extra_offset.unwrap_or(Decimal::ZERO),
        has_help_debt: row.has_help_debt.unwrap_or(false),
    }
}

/// Parse CSV text (the full file contents as a &str) and return a vector of
/// worksheet inputs. Rows are returned in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] - if the CSV is structurally invalid or a
///   required field cannot be deserialised.
pub fn load_from_str(input: &str) -> Result<Vec<IncomeTaxWorksheetInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .map(|result| Ok(convert_row(result?)))
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
///
/// # Errors
///
/// Returns an io::Error when the file cannot be read, or a
/// [CsvLoadError] when the contents are invalid.
pub fn load_from_file(
    path: &std::path::Path
) -> Result<Vec<IncomeTaxWorksheetInput>, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let inputs = load_from_str(&contents)?;
    Ok(inputs)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    // -----------------------------------------------------------------------
    // Helper: the minimal set of columns
    // -----------------------------------------------------------------------
    const MINIMAL_CSV: &str = "\
salary_income
95000.00
";

    // -----------------------------------------------------------------------
    // Helper: every column populated
    // -----------------------------------------------------------------------
    const FULL_CSV: &str = "\
salary_income,investment_income,other_income,work_deduction,education_deduction,donation_deduction,other_deduction,apply_lmito,extra_offset,has_help_debt
95000.00,5200.00,0.00,3200.00,900.00,300.00,0.00,true,0.00,true
";

    // -----------------------------------------------------------------------
    // Helper: multiple rows with empty optional cells
    // -----------------------------------------------------------------------
    const MULTI_ROW_CSV: &str = "\
salary_income,investment_income,apply_lmito,has_help_debt
45000.00,,true,
95000.00,5200.00,,true
200000.00,,,
";

    // -----------------------------------------------------------------------
    // 1. Minimal CSV - only the required column, optionals take defaults
    // -----------------------------------------------------------------------
    #[test]
    fn minimal_csv_parses_required_field() {
        let inputs = load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].salary_income, dec!(95000.00));
    }

    #[test]
    fn minimal_csv_defaults_optionals() {
        let inputs = load_from_str(MINIMAL_CSV).expect("should parse");
        let input = &inputs[0];

        assert_eq!(input.investment_income, Decimal::ZERO);
        assert_eq!(input.other_income, Decimal::ZERO);
        assert_eq!(input.work_deduction, Decimal::ZERO);
        assert_eq!(input.education_deduction, Decimal::ZERO);
        assert_eq!(input.donation_deduction, Decimal::ZERO);
        assert_eq!(input.other_deduction, Decimal::ZERO);
        assert_eq!(input.extra_offset, Decimal::ZERO);
        assert!(!input.apply_lmito);
        assert!(!input.has_help_debt);
    }

    // -----------------------------------------------------------------------
    // 2. Full CSV - every column populated, verify exact values
    // -----------------------------------------------------------------------
    #[test]
    fn full_csv_all_fields_populated() {
        let inputs = load_from_str(FULL_CSV).expect("should parse full CSV");

        assert_eq!(inputs.len(), 1);

        let input = &inputs[0];
        assert_eq!(input.salary_income, dec!(95000.00));
        assert_eq!(input.investment_income, dec!(5200.00));
        assert_eq!(input.work_deduction, dec!(3200.00));
        assert_eq!(input.education_deduction, dec!(900.00));
        assert_eq!(input.donation_deduction, dec!(300.00));
        assert!(input.apply_lmito);
        assert!(input.has_help_debt);
    }

    // -----------------------------------------------------------------------
    // 3. Multiple rows - count, order, and per-row defaults
    // -----------------------------------------------------------------------
    #[test]
    fn multi_row_count_and_order() {
        let inputs = load_from_str(MULTI_ROW_CSV).expect("should parse multi-row CSV");

        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0].salary_income, dec!(45000.00));
        assert_eq!(inputs[1].salary_income, dec!(95000.00));
        assert_eq!(inputs[2].salary_income, dec!(200000.00));
    }

    #[test]
    fn multi_row_empty_cells_take_defaults() {
        let inputs = load_from_str(MULTI_ROW_CSV).expect("should parse");

        // Row 0: investment empty, lmito set, help empty
        assert_eq!(inputs[0].investment_income, Decimal::ZERO);
        assert!(inputs[0].apply_lmito);
        assert!(!inputs[0].has_help_debt);

        // Row 1: investment set, lmito empty, help set
        assert_eq!(inputs[1].investment_income, dec!(5200.00));
        assert!(!inputs[1].apply_lmito);
        assert!(inputs[1].has_help_debt);
    }

    // -----------------------------------------------------------------------
    // 4. Error: missing required column
    // -----------------------------------------------------------------------
    #[test]
    fn missing_required_column_returns_parse_error() {
        // `salary_income` is missing entirely from the header
        let csv = "investment_income,apply_lmito\n5200.00,true\n";
        let result = load_from_str(csv);

        assert!(result.is_err());
    }

    // -----------------------------------------------------------------------
    // 5. Error: non-numeric value in a decimal field
    // -----------------------------------------------------------------------
    #[test]
    fn non_numeric_amount_returns_parse_error() {
        let csv = "salary_income\nnot_a_number\n";
        let result = load_from_str(csv);

        assert!(result.is_err());
    }

    #[test]
    fn invalid_boolean_returns_parse_error() {
        let csv = "salary_income,apply_lmito\n95000.00,maybe\n";
        let result = load_from_str(csv);

        assert!(result.is_err());
    }

    // -----------------------------------------------------------------------
    // 6. Header-only and empty input
    // -----------------------------------------------------------------------
    #[test]
    fn header_only_csv_returns_empty_vec() {
        let inputs = load_from_str("salary_income\n").expect("header-only CSV is valid");

        assert!(inputs.is_empty());
    }

    #[test]
    fn completely_empty_string_returns_empty_vec() {
        let inputs = load_from_str("").expect("empty string yields zero rows");

        assert!(inputs.is_empty());
    }

    // -----------------------------------------------------------------------
    // 7. Whitespace tolerance and column order
    // -----------------------------------------------------------------------
    #[test]
    fn whitespace_around_values_is_trimmed() {
        let csv = "\
salary_income , apply_lmito
95000.00 , true
";
        let inputs = load_from_str(csv).expect("should tolerate surrounding whitespace");

        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].salary_income, dec!(95000.00));
        assert!(inputs[0].apply_lmito);
    }

    #[test]
    fn column_order_does_not_matter() {
        // Columns deliberately shuffled relative to the canonical order
        let csv = "\
has_help_debt,work_deduction,salary_income
true,3200.00,95000.00
";
        let inputs = load_from_str(csv).expect("column order should not matter");

        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].salary_income, dec!(95000.00));
        assert_eq!(inputs[0].work_deduction, dec!(3200.00));
        assert!(inputs[0].has_help_debt);
    }

    // -----------------------------------------------------------------------
    // 8. Negative amounts pass through; the worksheet clamps them later
    // -----------------------------------------------------------------------
    #[test]
    fn negative_amounts_are_preserved_for_the_worksheet() {
        let csv = "salary_income,work_deduction\n95000.00,-500.00\n";
        let inputs = load_from_str(csv).expect("negative amounts are parseable");

        assert_eq!(inputs[0].work_deduction, dec!(-500.00));
    }
}

