use std::io;

use clap::Parser;
use tracing::error;

use comp_cli::{Cli, app, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let stdout = io::stdout().lock();
    if let Err(err) = app::run(&cli, stdout) {
        error!(error = ?err, "simulation failed");
        return Err(err);
    }

    Ok(())
}
