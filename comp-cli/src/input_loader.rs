//! CSV loader for batch simulation inputs.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive. Amounts are whole yen without separators.
//!
//! | Column                               | Required | Notes                          |
//! |--------------------------------------|----------|--------------------------------|
//! | `company_profit_before_compensation` | yes      | may be negative                |
//! | `base_monthly_compensation`          | yes      | positive                       |
//! | `increment_amount`                   | yes      | positive                       |
//! | `age`                                | yes      | years                          |
//! | `dependents`                         | yes      |                                |
//! | `annual_bonus`                       | no       | empty cell or missing = 0      |
//! | `other_deductions`                   | no       | empty cell or missing = 0      |
//!
//! ### Example
//!
//! ```csv
//! company_profit_before_compensation,base_monthly_compensation,increment_amount,age,dependents,annual_bonus
//! 20000000,1000000,100000,40,0,
//! 20000000,1000000,100000,40,0,3000000
//! ```
use std::path::{Path, PathBuf};

use comp_core::{InputError, SimulationInput};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CsvRow {
    company_profit_before_compensation: i64,
    base_monthly_compensation: i64,
    increment_amount: i64,
    age: u32,
    dependents: u32,
    #[serde(default)]
    annual_bonus: Option<i64>,
    #[serde(default)]
    other_deductions: Option<i64>,
}

/// Errors that can occur while loading simulation inputs.
///
/// Row numbers are 1-based with the header excluded.
#[derive(Debug, thiserror::Error)]
pub enum InputLoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, missing required column or a value of the wrong type.
    #[error("CSV parse error on row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("invalid input on row {row}: {source}")]
    Invalid {
        row: usize,
        #[source]
        source: InputError,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<SimulationInput, InputLoadError> {
    let input = SimulationInput {
        company_profit_before_compensation: row.company_profit_before_compensation,
        base_monthly_compensation: row.base_monthly_compensation,
        annual_bonus: row.annual_bonus.unwrap_or(0),
        age: row.age,
        dependents: row.dependents,
        increment_amount: row.increment_amount,
        other_deductions: row.other_deductions.unwrap_or(0),
    };

    input
        .validate()
        .map_err(|source| InputLoadError::Invalid {
            row: row_number,
            source,
        })?;

    Ok(input)
}

/// Parse CSV text and return one validated input per row, in file order.
///
/// # Errors
///
/// * [InputLoadError::Parse] if a row is structurally invalid or a required
///   field cannot be deserialised.
/// * [InputLoadError::Invalid] if a row fails [`SimulationInput::validate`].
pub fn load_from_str(input: &str) -> Result<Vec<SimulationInput>, InputLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row_number = idx + 1;
            let row = result.map_err(|source| InputLoadError::Parse {
                row: row_number,
                source,
            })?;
            convert_row(row, row_number)
        })
        .collect()
}

/// Read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<SimulationInput>, InputLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL_CSV: &str = "\
company_profit_before_compensation,base_monthly_compensation,increment_amount,age,dependents
20000000,1000000,100000,40,0
";

    const FULL_CSV: &str = "\
company_profit_before_compensation,base_monthly_compensation,increment_amount,age,dependents,annual_bonus,other_deductions
5000000,300000,50000,52,2,1000000,100000
";

    const REORDERED_CSV: &str = "\
age,dependents,annual_bonus,increment_amount,base_monthly_compensation,company_profit_before_compensation
38,1,,100000,600000,-2000000
";

    #[test]
    fn test_minimal_csv_parses_required_fields() {
        let inputs = load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(inputs, vec![SimulationInput::default()]);
    }

    #[test]
    fn test_full_csv_all_fields_populated() {
        let inputs = load_from_str(FULL_CSV).expect("should parse full CSV");

        assert_eq!(
            inputs[0],
            SimulationInput {
                company_profit_before_compensation: 5_000_000,
                base_monthly_compensation: 300_000,
                annual_bonus: 1_000_000,
                age: 52,
                dependents: 2,
                increment_amount: 50_000,
                other_deductions: 100_000,
            }
        );
    }

    #[test]
    fn test_column_order_and_empty_optional() {
        let inputs = load_from_str(REORDERED_CSV).expect("should parse reordered CSV");
        let input = &inputs[0];

        assert_eq!(input.company_profit_before_compensation, -2_000_000);
        assert_eq!(input.base_monthly_compensation, 600_000);
        assert_eq!(input.annual_bonus, 0);
        assert_eq!(input.other_deductions, 0);
        assert_eq!(input.age, 38);
    }

    #[test]
    fn test_whitespace_around_values_is_trimmed() {
        let csv = "\
company_profit_before_compensation, base_monthly_compensation, increment_amount, age, dependents
 20000000 , 1000000 , 100000 , 40 , 0
";

        let inputs = load_from_str(csv).unwrap();

        assert_eq!(inputs[0], SimulationInput::default());
    }

    #[test]
    fn test_empty_body_yields_no_inputs() {
        let csv = "company_profit_before_compensation,base_monthly_compensation,increment_amount,age,dependents\n";

        assert!(load_from_str(csv).unwrap().is_empty());
    }

    #[test]
    fn test_missing_required_column_is_parse_error() {
        let csv = "company_profit_before_compensation,base_monthly_compensation,age,dependents\n20000000,1000000,40,0\n";

        let result = load_from_str(csv);

        assert!(matches!(result, Err(InputLoadError::Parse { row: 1, .. })));
    }

    #[test]
    fn test_non_numeric_value_reports_row() {
        let csv = "\
company_profit_before_compensation,base_monthly_compensation,increment_amount,age,dependents
20000000,1000000,100000,40,0
20000000,lots,100000,40,0
";

        let result = load_from_str(csv);

        assert!(matches!(result, Err(InputLoadError::Parse { row: 2, .. })));
    }

    #[test]
    fn test_negative_age_is_parse_error() {
        let csv = "\
company_profit_before_compensation,base_monthly_compensation,increment_amount,age,dependents
20000000,1000000,100000,-1,0
";

        assert!(matches!(
            load_from_str(csv),
            Err(InputLoadError::Parse { row: 1, .. })
        ));
    }

    #[test]
    fn test_zero_increment_is_invalid() {
        let csv = "\
company_profit_before_compensation,base_monthly_compensation,increment_amount,age,dependents
20000000,1000000,0,40,0
";

        let result = load_from_str(csv);

        assert!(matches!(
            result,
            Err(InputLoadError::Invalid {
                row: 1,
                source: InputError::NonPositiveIncrement(0),
            })
        ));
    }

    #[test]
    fn test_negative_bonus_is_invalid() {
        let csv = "\
company_profit_before_compensation,base_monthly_compensation,increment_amount,age,dependents,annual_bonus
20000000,1000000,100000,40,0,-1
";

        assert!(matches!(
            load_from_str(csv),
            Err(InputLoadError::Invalid {
                row: 1,
                source: InputError::NegativeBonus(-1),
            })
        ));
    }
}
