use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BracketTable, BracketTableError};

/// Errors for a regime configuration that must not be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A bracket table is malformed.
    #[error("{table} table: {source}")]
    Table {
        table: &'static str,
        #[source]
        source: BracketTableError,
    },

    /// A tier rate is outside [0, 1].
    #[error("{table} table: tier {index} rate must be between 0 and 1, got {rate}")]
    InvalidTierRate {
        table: &'static str,
        index: usize,
        rate: Decimal,
    },

    /// A scalar rate is outside [0, 1].
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    /// A cap or unit that must be positive is not.
    #[error("{name} must be positive, got {value}")]
    NonPositiveAmount { name: &'static str, value: i64 },

    /// A deduction amount is negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeAmount { name: &'static str, value: i64 },
}

/// Premium rates and standard-remuneration caps.
///
/// Rates are the combined employer + employee rate; each side pays half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialInsuranceConfig {
    pub health_rate: Decimal,
    /// Added to `health_rate` for ages 40 to 64.
    pub nursing_care_rate: Decimal,
    pub pension_rate: Decimal,
    pub health_monthly_cap: i64,
    pub pension_monthly_cap: i64,
    /// Cumulative yearly cap on the health bonus base.
    pub health_bonus_annual_cap: i64,
    /// Cap on the pension bonus base for a single payment.
    pub pension_bonus_payment_cap: i64,
    /// Bonus bases are floored to a multiple of this.
    pub bonus_base_unit: i64,
    /// Employer-only levy on the pension base.
    pub employer_levy_rate: Decimal,
}

impl SocialInsuranceConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a rate is outside [0, 1] or a cap is not
    /// positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate("health_rate", self.health_rate)?;
        check_rate("nursing_care_rate", self.nursing_care_rate)?;
        check_rate("pension_rate", self.pension_rate)?;
        check_rate("employer_levy_rate", self.employer_levy_rate)?;
        check_positive("health_monthly_cap", self.health_monthly_cap)?;
        check_positive("pension_monthly_cap", self.pension_monthly_cap)?;
        check_positive("health_bonus_annual_cap", self.health_bonus_annual_cap)?;
        check_positive("pension_bonus_payment_cap", self.pension_bonus_payment_cap)?;
        check_positive("bonus_base_unit", self.bonus_base_unit)?;
        Ok(())
    }
}

/// One statutory regime: every table and constant the engine reads.
///
/// A new tax year is a new `RegimeConfig` value; the calculators never read
/// globals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConfig {
    pub name: String,

    /// Keyed by annual compensation.
    pub salary_income_deduction: BracketTable,

    /// Keyed by taxable income; the adjustment is the negated statutory
    /// deduction.
    pub income_tax: BracketTable,

    /// Keyed by total income.
    pub basic_deduction: BracketTable,

    /// Reconstruction surtax, applied as a multiplier of `1 + surtax_rate`.
    pub surtax_rate: Decimal,

    pub resident_tax_rate: Decimal,

    /// Per dependent.
    pub dependent_deduction: i64,

    pub corporate_tax_rate: Decimal,

    pub social_insurance: SocialInsuranceConfig,
}

impl RegimeConfig {
    /// Validates every rate, amount and table tier.
    ///
    /// Table shape is already guaranteed by [`BracketTable`]; this checks
    /// the values inside.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_table_rates("salary_income_deduction", &self.salary_income_deduction)?;
        check_table_rates("income_tax", &self.income_tax)?;
        check_table_rates("basic_deduction", &self.basic_deduction)?;
        check_rate("surtax_rate", self.surtax_rate)?;
        check_rate("resident_tax_rate", self.resident_tax_rate)?;
        check_rate("corporate_tax_rate", self.corporate_tax_rate)?;
        if self.dependent_deduction < 0 {
            return Err(ConfigError::NegativeAmount {
                name: "dependent_deduction",
                value: self.dependent_deduction,
            });
        }
        self.social_insurance.validate()
    }
}

fn check_rate(
    name: &'static str,
    value: Decimal,
) -> Result<(), ConfigError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ConfigError::InvalidRate { name, value });
    }
    Ok(())
}

fn check_positive(
    name: &'static str,
    value: i64,
) -> Result<(), ConfigError> {
    if value <= 0 {
        return Err(ConfigError::NonPositiveAmount { name, value });
    }
    Ok(())
}

fn check_table_rates(
    table: &'static str,
    brackets: &BracketTable,
) -> Result<(), ConfigError> {
    for (index, tier) in brackets.tiers().enumerate() {
        if tier.rate < Decimal::ZERO || tier.rate > Decimal::ONE {
            return Err(ConfigError::InvalidTierRate {
                table,
                index,
                rate: tier.rate,
            });
        }
    }
    Ok(())
}
