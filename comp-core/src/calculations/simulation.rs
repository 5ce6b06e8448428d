//! Sweep of compensation levels around a base amount.
//!
//! For offsets −5 to +5 the candidate monthly compensation is
//! `base + offset × increment`. Non-positive candidates, and candidates whose
//! figures overflow `i64`, are skipped, so a run yields between zero and
//! eleven rows in generation order. Each retained
//! candidate runs the contribution, personal and corporate calculators in
//! turn and becomes one [`SimulationResultRow`].
//!
//! # Example
//!
//! ```no_run
//! use comp_core::{RegimeConfig, SimulationInput, Simulator};
//!
//! fn best_monthly(regime: &RegimeConfig) -> Option<i64> {
//!     let simulator = Simulator::new(regime).ok()?;
//!     let rows = simulator.run(&SimulationInput::default());
//!     comp_core::optimal_row(&rows).map(|row| row.monthly_compensation)
//! }
//! ```

use tracing::{debug, warn};

use crate::calculations::contribution::ContributionCalculator;
use crate::calculations::corporate_tax::CorporateTaxCalculator;
use crate::calculations::personal_tax::{PersonalTaxCalculator, PersonalTaxInput};
use crate::{ConfigError, RegimeConfig, SimulationInput, SimulationResultRow};

/// Sweep points on each side of the base.
pub const SWEEP_STEPS: i64 = 5;

/// Candidate monthly compensation levels for `input`, skipped ones removed.
///
/// Candidates that are non-positive, or whose monthly or annual amount
/// overflows, are dropped.
pub fn sweep_candidates(input: &SimulationInput) -> Vec<i64> {
    (-SWEEP_STEPS..=SWEEP_STEPS)
        .filter_map(|offset| {
            let candidate = offset
                .checked_mul(input.increment_amount)
                .and_then(|delta| input.base_monthly_compensation.checked_add(delta));
            let annual = candidate
                .and_then(|monthly| monthly.checked_mul(12))
                .and_then(|annual| annual.checked_add(input.annual_bonus));
            match (candidate, annual) {
                (Some(monthly), Some(_)) if monthly > 0 => Some(monthly),
                _ => {
                    debug!(offset, ?candidate, "skipping sweep candidate");
                    None
                }
            }
        })
        .collect()
}

/// Runs the engine for one validated regime.
///
/// Holds no state beyond the borrowed regime, so a `Simulator` can be shared
/// freely and every call to [`Simulator::run`] is independent.
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'a> {
    regime: &'a RegimeConfig,
}

impl<'a> Simulator<'a> {
    /// Validates `regime` and builds a simulator for it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any rate, cap or tier in the regime is
    /// invalid; the engine will not run on such a configuration.
    pub fn new(regime: &'a RegimeConfig) -> Result<Self, ConfigError> {
        regime.validate()?;
        debug!(regime = %regime.name, "regime validated");
        Ok(Self { regime })
    }

    pub fn regime(&self) -> &'a RegimeConfig {
        self.regime
    }

    /// Evaluates every sweep candidate for `input`.
    ///
    /// Degenerate input (non-positive base or increment) yields fewer rows,
    /// possibly none; it is not an error.
    pub fn run(
        &self,
        input: &SimulationInput,
    ) -> Vec<SimulationResultRow> {
        let rows: Vec<_> = sweep_candidates(input)
            .into_iter()
            .filter_map(|monthly| {
                let row = self.evaluate(input, monthly);
                if row.is_none() {
                    debug!(monthly, "skipping sweep candidate whose company figures overflow");
                }
                row
            })
            .collect();

        if rows.is_empty() {
            warn!(
                base = input.base_monthly_compensation,
                increment = input.increment_amount,
                "sweep produced no rows"
            );
        }

        rows
    }

    /// Computes the full row for one monthly compensation level.
    ///
    /// Returns `None` when the company cost, the profit after it or the
    /// combined cash does not fit in an `i64`.
    pub fn evaluate(
        &self,
        input: &SimulationInput,
        monthly_compensation: i64,
    ) -> Option<SimulationResultRow> {
        let age_category = input.age_category();

        let contribution = ContributionCalculator::new(&self.regime.social_insurance)
            .annual_contribution(monthly_compensation, input.annual_bonus, age_category);

        let personal = PersonalTaxCalculator::new(self.regime).calculate(&PersonalTaxInput {
            monthly_compensation,
            annual_bonus: input.annual_bonus,
            dependents: input.dependents,
            other_deductions: input.other_deductions,
            individual_social_insurance: contribution.individual,
        });

        let corporate = CorporateTaxCalculator::new(self.regime.corporate_tax_rate).calculate(
            input.company_profit_before_compensation,
            personal.annual_compensation,
            contribution.company,
        )?;

        let total_cash_remaining = personal.take_home_pay.checked_add(corporate.net_profit)?;

        debug!(
            monthly_compensation,
            taxable_income = personal.taxable_income,
            corporate_tax = corporate.corporate_tax,
            total_cash_remaining,
            "evaluated sweep point"
        );

        Some(SimulationResultRow {
            monthly_compensation,
            annual_bonus: input.annual_bonus,
            annual_compensation: personal.annual_compensation,
            salary_income_deduction: personal.salary_income_deduction,
            total_income: personal.total_income,
            basic_deduction: personal.basic_deduction,
            dependent_deduction: personal.dependent_deduction,
            other_deductions: personal.other_deductions,
            taxable_income: personal.taxable_income,
            income_tax_rate: personal.income_tax_rate,
            income_tax_deduction: personal.income_tax_deduction,
            income_tax: personal.income_tax,
            residence_tax: personal.residence_tax,
            total_individual_taxes: personal.total_taxes,
            individual_social_insurance: contribution.individual,
            individual_take_home_pay: personal.take_home_pay,
            health_insurance_base: contribution.monthly.health_base,
            pension_base: contribution.monthly.pension_base,
            bonus_pension_base: contribution.bonus.pension_base,
            employer_levy: contribution.employer_levy,
            company_social_insurance: contribution.company,
            total_company_cost: corporate.total_company_cost,
            company_profit_after_compensation: corporate.profit_after_compensation,
            corporate_tax: corporate.corporate_tax,
            company_net_profit: corporate.net_profit,
            total_cash_remaining,
        })
    }
}

/// Validates `regime` and runs one sweep.
///
/// # Errors
///
/// Returns [`ConfigError`] only for an invalid regime; any numeric input is
/// accepted.
pub fn run_simulation(
    regime: &RegimeConfig,
    input: &SimulationInput,
) -> Result<Vec<SimulationResultRow>, ConfigError> {
    Ok(Simulator::new(regime)?.run(input))
}
