//! CSV export of simulation rows.
//!
//! One record per row, prefixed with the 1-based index of the input that
//! produced it so batch runs can be told apart. Amounts are plain integers
//! and the income-tax rate is a decimal fraction.

use std::io::Write;
use std::path::Path;

use comp_core::SimulationResultRow;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct ExportRecord {
    input: usize,
    monthly_compensation: i64,
    annual_bonus: i64,
    annual_compensation: i64,
    salary_income_deduction: i64,
    total_income: i64,
    basic_deduction: i64,
    dependent_deduction: i64,
    other_deductions: i64,
    taxable_income: i64,
    income_tax_rate: Decimal,
    income_tax_deduction: i64,
    income_tax: i64,
    residence_tax: i64,
    total_individual_taxes: i64,
    individual_social_insurance: i64,
    individual_take_home_pay: i64,
    health_insurance_base: i64,
    pension_base: i64,
    bonus_pension_base: i64,
    employer_levy: i64,
    company_social_insurance: i64,
    total_company_cost: i64,
    company_profit_after_compensation: i64,
    corporate_tax: i64,
    company_net_profit: i64,
    total_taxes: i64,
    total_cash_remaining: i64,
}

impl ExportRecord {
    fn new(
        input: usize,
        row: &SimulationResultRow,
    ) -> Self {
        Self {
            input,
            monthly_compensation: row.monthly_compensation,
            annual_bonus: row.annual_bonus,
            annual_compensation: row.annual_compensation,
            salary_income_deduction: row.salary_income_deduction,
            total_income: row.total_income,
            basic_deduction: row.basic_deduction,
            dependent_deduction: row.dependent_deduction,
            other_deductions: row.other_deductions,
            taxable_income: row.taxable_income,
            income_tax_rate: row.income_tax_rate,
            income_tax_deduction: row.income_tax_deduction,
            income_tax: row.income_tax,
            residence_tax: row.residence_tax,
            total_individual_taxes: row.total_individual_taxes,
            individual_social_insurance: row.individual_social_insurance,
            individual_take_home_pay: row.individual_take_home_pay,
            health_insurance_base: row.health_insurance_base,
            pension_base: row.pension_base,
            bonus_pension_base: row.bonus_pension_base,
            employer_levy: row.employer_levy,
            company_social_insurance: row.company_social_insurance,
            total_company_cost: row.total_company_cost,
            company_profit_after_compensation: row.company_profit_after_compensation,
            corporate_tax: row.corporate_tax,
            company_net_profit: row.company_net_profit,
            total_taxes: row.total_taxes(),
            total_cash_remaining: row.total_cash_remaining,
        }
    }
}

/// Writes every row of every run to `writer`.
///
/// `runs` holds one slice of rows per input, in input order. A header is
/// written even when there are no rows.
pub fn write_rows<W: Write>(
    writer: W,
    runs: &[Vec<SimulationResultRow>],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for (idx, rows) in runs.iter().enumerate() {
        for row in rows {
            csv_writer.serialize(ExportRecord::new(idx + 1, row))?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the rows to it.
pub fn write_rows_to_file(
    path: &Path,
    runs: &[Vec<SimulationResultRow>],
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_rows(file, runs)
}

const HEADER: [&str; 28] = [
    "input",
    "monthly_compensation",
    "annual_bonus",
    "annual_compensation",
    "salary_income_deduction",
    "total_income",
    "basic_deduction",
    "dependent_deduction",
    "other_deductions",
    "taxable_income",
    "income_tax_rate",
    "income_tax_deduction",
    "income_tax",
    "residence_tax",
    "total_individual_taxes",
    "individual_social_insurance",
    "individual_take_home_pay",
    "health_insurance_base",
    "pension_base",
    "bonus_pension_base",
    "employer_levy",
    "company_social_insurance",
    "total_company_cost",
    "company_profit_after_compensation",
    "corporate_tax",
    "company_net_profit",
    "total_taxes",
    "total_cash_remaining",
];
