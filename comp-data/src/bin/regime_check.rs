use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use comp_core::{BracketTable, RegimeConfig};
use comp_data::load_regime;
use tracing_subscriber::EnvFilter;

/// Validate a regime configuration and print its tables.
///
/// With no arguments the bundled regime is checked. `--brackets` replaces the
/// regime's bracket tables with a CSV file with the columns:
/// - table: salary_income_deduction, income_tax or basic_deduction
/// - cap: inclusive upper bound (empty for unbounded)
/// - rate: proportional rate as a decimal (e.g. 0.23)
/// - adjustment: signed flat amount added to value × rate
#[derive(Parser, Debug)]
#[command(name = "comp-regime-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Regime TOML file (defaults to the bundled regime)
    #[arg(short, long)]
    regime: Option<PathBuf>,

    /// Bracket CSV file replacing the regime's tables
    #[arg(short, long)]
    brackets: Option<PathBuf>,
}

fn print_table(
    title: &str,
    table: &BracketTable,
) {
    println!("{title}:");
    for tier in table.tiers() {
        let cap = tier
            .cap
            .map(|cap| cap.to_string())
            .unwrap_or_else(|| "unbounded".to_string());
        println!(
            "  up to {:>12}  rate {:>6}  adjustment {:>12}",
            cap, tier.rate, tier.adjustment
        );
    }
}

fn print_regime(regime: &RegimeConfig) {
    let si = &regime.social_insurance;
    println!("Regime: {}", regime.name);
    println!(
        "  health {} (+{} nursing care), pension {}, employer levy {}",
        si.health_rate, si.nursing_care_rate, si.pension_rate, si.employer_levy_rate
    );
    println!(
        "  monthly caps: health {}, pension {}; bonus caps: health {} / year, pension {} / payment",
        si.health_monthly_cap,
        si.pension_monthly_cap,
        si.health_bonus_annual_cap,
        si.pension_bonus_payment_cap
    );
    println!(
        "  surtax {}, resident tax {}, corporate tax {}, per-dependent deduction {}",
        regime.surtax_rate,
        regime.resident_tax_rate,
        regime.corporate_tax_rate,
        regime.dependent_deduction
    );
    print_table("Salary-income deduction", &regime.salary_income_deduction);
    print_table("Income tax", &regime.income_tax);
    print_table("Basic deduction", &regime.basic_deduction);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info")),
        )
        .without_time()
        .with_target(false)
        .init();

    let args = Args::parse();

    let regime = load_regime(args.regime.as_deref(), args.brackets.as_deref())
        .context("Regime configuration is invalid")?;

    print_regime(&regime);
    println!("Regime '{}' is valid.", regime.name);

    Ok(())
}
