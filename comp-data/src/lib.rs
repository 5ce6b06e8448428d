//! Loading regime configuration: TOML regime files, CSV bracket tables and
//! the bundled default regime.

mod loader;
mod regime;

pub use loader::{BracketLoader, BracketLoaderError, BracketRecord, BracketTableName, BracketTables};
pub use regime::{
    DEFAULT_REGIME_TOML, RegimeLoadError, default_regime, load_regime, load_regime_file,
    parse_regime,
};
