//! Calculation engine for the compensation sweep.
//!
//! Each calculator borrows its slice of a [`crate::RegimeConfig`] and is a
//! pure function of its inputs; [`Simulator`] runs them for every sweep
//! point.

pub mod common;
pub mod contribution;
pub mod corporate_tax;
pub mod personal_tax;
pub mod selection;
pub mod simulation;

pub use contribution::{AnnualContribution, Contribution, ContributionCalculator};
pub use corporate_tax::{CorporateTax, CorporateTaxCalculator};
pub use personal_tax::{PersonalTax, PersonalTaxCalculator, PersonalTaxInput};
pub use selection::{base_row, max_cash_row, optimal_row};
pub use simulation::{SWEEP_STEPS, Simulator, run_simulation, sweep_candidates};
