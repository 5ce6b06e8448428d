mod age_category;
mod bracket;
mod regime_config;
mod simulation_input;
mod simulation_result;

pub use age_category::AgeCategory;
pub use bracket::{BracketTable, BracketTableError, BracketTier, find_tier};
pub use regime_config::{ConfigError, RegimeConfig, SocialInsuranceConfig};
pub use simulation_input::{InputError, SimulationInput};
pub use simulation_result::SimulationResultRow;
