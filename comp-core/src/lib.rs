pub mod calculations;
pub mod models;

#[cfg(test)]
pub(crate) mod test_support;

pub use calculations::{Simulator, base_row, max_cash_row, optimal_row, run_simulation};
pub use models::*;
