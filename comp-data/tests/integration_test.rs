//! Integration tests for regime loading against the bundled data files.

use std::path::{Path, PathBuf};

use comp_core::{SimulationInput, optimal_row, run_simulation};
use comp_data::{BracketLoader, default_regime, load_regime};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const TEST_CSV_R7: &str = include_str!("../test-data/brackets_r7.csv");

fn manifest_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn test_csv_tables_match_bundled_regime() {
    let regime = default_regime().expect("bundled regime should load");

    let tables = BracketLoader::load(TEST_CSV_R7.as_bytes()).expect("Failed to load CSV");

    assert_eq!(tables.salary_income_deduction, regime.salary_income_deduction);
    assert_eq!(tables.income_tax, regime.income_tax);
    assert_eq!(tables.basic_deduction, regime.basic_deduction);
}

#[test]
fn test_load_regime_from_files() {
    let regime = load_regime(
        Some(&manifest_path("data/regime_r7_tokyo.toml")),
        Some(&manifest_path("test-data/brackets_r7.csv")),
    )
    .expect("Failed to load regime from files");

    assert_eq!(regime, default_regime().unwrap());
}

#[test]
fn test_load_regime_missing_brackets_file() {
    let result = load_regime(None, Some(Path::new("/this/path/does/not/exist.csv")));

    assert!(result.is_err());
}

#[test]
fn test_bundled_regime_scenario() {
    let regime = default_regime().unwrap();

    let rows = run_simulation(&regime, &SimulationInput::default()).unwrap();
    let base = rows
        .iter()
        .find(|r| r.monthly_compensation == 1_000_000)
        .unwrap();

    assert_eq!(rows.len(), 11);
    assert_eq!(base.annual_compensation, 12_000_000);
    assert_eq!(base.taxable_income, 8_148_300);
    assert_eq!(base.income_tax_rate, dec!(0.23));
    assert_eq!(base.income_tax, 1_264_109);
    assert_eq!(base.residence_tax, 814_830);
    assert_eq!(base.corporate_tax, 1_965_066);
    assert_eq!(base.total_cash_remaining, 13_084_515);
}

#[test]
fn test_bundled_regime_optimal_row() {
    let regime = default_regime().unwrap();

    let rows = run_simulation(&regime, &SimulationInput::default()).unwrap();

    assert_eq!(optimal_row(&rows).unwrap().monthly_compensation, 1_000_000);
}

#[test]
fn test_csv_tables_swap_regime_year() {
    // Flat basic deduction, everything else unchanged.
    let csv = TEST_CSV_R7
        .lines()
        .filter(|line| !line.starts_with("basic_deduction"))
        .chain(std::iter::once("basic_deduction,,0,480000"))
        .collect::<Vec<_>>()
        .join("\n");
    let tables = BracketLoader::load(csv.as_bytes()).unwrap();

    let regime = tables.apply_to(default_regime().unwrap());

    assert_eq!(regime.basic_deduction.len(), 1);
    assert_eq!(regime.basic_deduction.find(30_000_000).adjustment, 480_000);
    assert_eq!(regime.name, "r7-tokyo");
}
