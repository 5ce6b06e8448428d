use std::path::PathBuf;

use clap::Parser;
use comp_core::SimulationInput;

use crate::utils::parse_amount;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Owner-compensation simulator for a small Japanese company.
///
/// Sweeps monthly compensation around a base amount and reports, for each
/// level, personal income and resident tax, social insurance on both sides,
/// corporate tax and the combined cash left to owner and company.
///
/// Amounts are whole yen and accept comma separators ("20,000,000").
#[derive(Debug, Parser)]
#[command(name = "comp-sim", version)]
pub struct Cli {
    /// Operating profit before owner compensation and employer social costs.
    #[arg(long, default_value = "20000000", value_parser = parse_amount, allow_hyphen_values = true)]
    pub profit: i64,

    /// Monthly compensation at the centre of the sweep.
    #[arg(long, default_value = "1000000", value_parser = parse_amount)]
    pub base: i64,

    /// Annual bonus, treated as one payment.
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    pub bonus: i64,

    /// Owner's age in years.
    #[arg(long, default_value_t = 40)]
    pub age: u32,

    /// Number of dependents.
    #[arg(long, default_value_t = 0)]
    pub dependents: u32,

    /// Step between sweep points.
    #[arg(long, default_value = "100000", value_parser = parse_amount)]
    pub increment: i64,

    /// Further personal deductions (life insurance, iDeCo, ...).
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    pub other_deductions: i64,

    /// Regime TOML file (defaults to the bundled regime).
    #[arg(long)]
    pub regime: Option<PathBuf>,

    /// Bracket CSV file replacing the regime's tables.
    #[arg(long)]
    pub brackets: Option<PathBuf>,

    /// CSV of inputs to run as a batch instead of the amount flags.
    #[arg(long)]
    pub inputs: Option<PathBuf>,

    /// Write every row to this CSV file.
    #[arg(long)]
    pub csv_out: Option<PathBuf>,

    /// Log level or filter directive; overrides RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Append log output to this file as well as stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The single input described by the amount flags.
    pub fn input(&self) -> SimulationInput {
        SimulationInput {
            company_profit_before_compensation: self.profit,
            base_monthly_compensation: self.base,
            annual_bonus: self.bonus,
            age: self.age,
            dependents: self.dependents,
            increment_amount: self.increment,
            other_deductions: self.other_deductions,
        }
    }
}
