use std::io::Read;

use comp_core::{BracketTable, BracketTableError, BracketTier, RegimeConfig};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading bracket tables from CSV.
#[derive(Debug, Error)]
pub enum BracketLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unknown bracket table '{table}' on row {row}")]
    UnknownTable { table: String, row: usize },

    #[error("no rows found for the {0} table")]
    MissingTable(&'static str),

    #[error("{table} table: {source}")]
    InvalidTable {
        table: &'static str,
        #[source]
        source: BracketTableError,
    },
}

impl From<csv::Error> for BracketLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketLoaderError::CsvParse(err.to_string())
    }
}

/// The three tables a regime keys its deductions and tax on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketTableName {
    SalaryIncomeDeduction,
    IncomeTax,
    BasicDeduction,
}

impl BracketTableName {
    pub const ALL: [Self; 3] = [
        Self::SalaryIncomeDeduction,
        Self::IncomeTax,
        Self::BasicDeduction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SalaryIncomeDeduction => "salary_income_deduction",
            Self::IncomeTax => "income_tax",
            Self::BasicDeduction => "basic_deduction",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == s)
    }
}

/// A single record from a bracket CSV file.
///
/// - `table`: one of `salary_income_deduction`, `income_tax`, `basic_deduction`
/// - `cap`: inclusive upper bound (empty for the unbounded tier)
/// - `rate`: proportional rate as a decimal (e.g. `0.23`)
/// - `adjustment`: signed flat amount added to `value × rate`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub table: String,
    pub cap: Option<i64>,
    pub rate: Decimal,
    pub adjustment: i64,
}

/// Validated tables parsed from one CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTables {
    pub salary_income_deduction: BracketTable,
    pub income_tax: BracketTable,
    pub basic_deduction: BracketTable,
}

impl BracketTables {
    /// Replaces the tables of `regime`, keeping its rates and caps.
    pub fn apply_to(
        self,
        regime: RegimeConfig,
    ) -> RegimeConfig {
        RegimeConfig {
            salary_income_deduction: self.salary_income_deduction,
            income_tax: self.income_tax,
            basic_deduction: self.basic_deduction,
            ..regime
        }
    }
}

/// Loader for bracket tables stored as CSV.
///
/// Rows for a table must appear in ascending cap order; rows for different
/// tables may be interleaved.
pub struct BracketLoader;

impl BracketLoader {
    /// Parse bracket records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Group records by table and validate each table.
    ///
    /// All three tables must be present.
    pub fn build(records: &[BracketRecord]) -> Result<BracketTables, BracketLoaderError> {
        let mut salary = Vec::new();
        let mut income_tax = Vec::new();
        let mut basic = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            let name = BracketTableName::parse(&record.table).ok_or_else(|| {
                BracketLoaderError::UnknownTable {
                    table: record.table.clone(),
                    row: idx + 1,
                }
            })?;
            let tier = BracketTier {
                cap: record.cap,
                rate: record.rate,
                adjustment: record.adjustment,
            };
            match name {
                BracketTableName::SalaryIncomeDeduction => salary.push(tier),
                BracketTableName::IncomeTax => income_tax.push(tier),
                BracketTableName::BasicDeduction => basic.push(tier),
            }
        }

        Ok(BracketTables {
            salary_income_deduction: Self::table(BracketTableName::SalaryIncomeDeduction, salary)?,
            income_tax: Self::table(BracketTableName::IncomeTax, income_tax)?,
            basic_deduction: Self::table(BracketTableName::BasicDeduction, basic)?,
        })
    }

    /// Parse and build in one step.
    pub fn load<R: Read>(reader: R) -> Result<BracketTables, BracketLoaderError> {
        let records = Self::parse(reader)?;
        Self::build(&records)
    }

    fn table(
        name: BracketTableName,
        tiers: Vec<BracketTier>,
    ) -> Result<BracketTable, BracketLoaderError> {
        if tiers.is_empty() {
            return Err(BracketLoaderError::MissingTable(name.as_str()));
        }
        BracketTable::new(tiers).map_err(|source| BracketLoaderError::InvalidTable {
            table: name.as_str(),
            source,
        })
    }
}
