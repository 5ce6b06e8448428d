pub mod app;
pub mod cli;
pub mod export;
pub mod input_loader;
pub mod logging;
pub mod report;
pub mod utils;

pub use cli::Cli;
pub use report::Report;
