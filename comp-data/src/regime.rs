//! Regime configuration files.
//!
//! A regime is a TOML document holding every rate, cap and bracket table the
//! engine reads:
//!
//! ```toml
//! name = "r7-tokyo"
//! surtax_rate = "0.021"
//! resident_tax_rate = "0.10"
//! dependent_deduction = 380_000
//! corporate_tax_rate = "0.30"
//!
//! [social_insurance]
//! health_rate = "0.0998"
//! # ...
//!
//! [[income_tax]]
//! cap = 1_949_999
//! rate = "0.05"
//! adjustment = 0
//! ```
//!
//! Rates are quoted so they parse as exact decimals. A tier without `cap` is
//! the unbounded top tier. The bracket tables can also be supplied separately
//! as CSV (see [`crate::BracketLoader`]), replacing those in the TOML.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use comp_core::{ConfigError, RegimeConfig};
use thiserror::Error;
use tracing::info;

use crate::loader::{BracketLoader, BracketLoaderError};

/// The bundled Tokyo FY2025 regime.
pub const DEFAULT_REGIME_TOML: &str = include_str!("../data/regime_r7_tokyo.toml");

/// Errors that can occur when loading a regime.
#[derive(Debug, Error)]
pub enum RegimeLoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("bracket CSV: {0}")]
    Brackets(#[from] BracketLoaderError),

    #[error("invalid regime: {0}")]
    Config(#[from] ConfigError),
}

/// Parses and validates a regime TOML document.
pub fn parse_regime(toml_text: &str) -> Result<RegimeConfig, RegimeLoadError> {
    let regime: RegimeConfig = toml::from_str(toml_text)?;
    regime.validate()?;
    Ok(regime)
}

/// The bundled regime, parsed and validated.
pub fn default_regime() -> Result<RegimeConfig, RegimeLoadError> {
    parse_regime(DEFAULT_REGIME_TOML)
}

/// Reads a regime TOML file.
pub fn load_regime_file(path: &Path) -> Result<RegimeConfig, RegimeLoadError> {
    let text = fs::read_to_string(path).map_err(|source| RegimeLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let regime = parse_regime(&text)?;
    info!(regime = %regime.name, path = %path.display(), "loaded regime");
    Ok(regime)
}

/// Builds the regime a run should use.
///
/// Starts from `regime_path` (or the bundled regime when `None`) and, when
/// `brackets_path` is given, replaces its bracket tables with the CSV ones.
/// The result is validated either way.
pub fn load_regime(
    regime_path: Option<&Path>,
    brackets_path: Option<&Path>,
) -> Result<RegimeConfig, RegimeLoadError> {
    let regime = match regime_path {
        Some(path) => load_regime_file(path)?,
        None => default_regime()?,
    };

    let Some(path) = brackets_path else {
        return Ok(regime);
    };

    let file = File::open(path).map_err(|source| RegimeLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tables = BracketLoader::load(file)?;
    let regime = tables.apply_to(regime);
    regime.validate()?;
    info!(path = %path.display(), "replaced bracket tables from CSV");

    Ok(regime)
}
