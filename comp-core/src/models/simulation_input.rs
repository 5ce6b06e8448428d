use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AgeCategory;

/// Caller-side validation failures for a [`SimulationInput`].
///
/// The engine itself accepts any input and simply produces fewer rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("increment amount must be positive, got {0}")]
    NonPositiveIncrement(i64),

    #[error("base monthly compensation must be positive, got {0}")]
    NonPositiveBaseCompensation(i64),

    #[error("annual bonus must be non-negative, got {0}")]
    NegativeBonus(i64),

    #[error("other deductions must be non-negative, got {0}")]
    NegativeOtherDeductions(i64),
}

/// Parameters for one simulation run. Amounts are whole yen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Operating profit before owner pay and employer social costs.
    pub company_profit_before_compensation: i64,

    /// Centre of the sweep.
    pub base_monthly_compensation: i64,

    #[serde(default)]
    pub annual_bonus: i64,

    /// Only the age band matters; see [`AgeCategory::from_age`].
    pub age: u32,

    #[serde(default)]
    pub dependents: u32,

    /// Step between sweep points.
    pub increment_amount: i64,

    /// Additional personal deductions not otherwise modelled.
    #[serde(default)]
    pub other_deductions: i64,
}

impl SimulationInput {
    pub fn age_category(&self) -> AgeCategory {
        AgeCategory::from_age(self.age)
    }

    /// Checks the input before it is handed to the engine.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] for a non-positive increment or base, or a
    /// negative bonus or other deduction.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.increment_amount <= 0 {
            return Err(InputError::NonPositiveIncrement(self.increment_amount));
        }
        if self.base_monthly_compensation <= 0 {
            return Err(InputError::NonPositiveBaseCompensation(
                self.base_monthly_compensation,
            ));
        }
        if self.annual_bonus < 0 {
            return Err(InputError::NegativeBonus(self.annual_bonus));
        }
        if self.other_deductions < 0 {
            return Err(InputError::NegativeOtherDeductions(self.other_deductions));
        }
        Ok(())
    }
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            company_profit_before_compensation: 20_000_000,
            base_monthly_compensation: 1_000_000,
            annual_bonus: 0,
            age: 40,
            dependents: 0,
            increment_amount: 100_000,
            other_deductions: 0,
        }
    }
}
