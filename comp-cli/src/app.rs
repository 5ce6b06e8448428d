use std::io::Write;

use anyhow::{Context, Result};
use comp_core::{SimulationInput, SimulationResultRow, Simulator};
use comp_data::load_regime;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::report::Report;
use crate::{export, input_loader};

/// The inputs a run covers: the `--inputs` CSV when given, else the single
/// input built from the amount flags.
pub fn collect_inputs(cli: &Cli) -> Result<Vec<SimulationInput>> {
    let Some(path) = &cli.inputs else {
        let input = cli.input();
        input.validate().context("invalid simulation input")?;
        return Ok(vec![input]);
    };

    let inputs = input_loader::load_from_file(path)
        .with_context(|| format!("failed to load inputs from '{}'", path.display()))?;
    info!(count = inputs.len(), path = %path.display(), "loaded inputs");
    Ok(inputs)
}

/// Loads the regime, runs every input and writes the reports to `out`.
pub fn run<W: Write>(
    cli: &Cli,
    mut out: W,
) -> Result<Vec<Vec<SimulationResultRow>>> {
    let regime = load_regime(cli.regime.as_deref(), cli.brackets.as_deref())
        .context("failed to load regime")?;
    let simulator = Simulator::new(&regime).context("regime is invalid")?;
    debug!(regime = %regime.name, "using regime");

    let inputs = collect_inputs(cli)?;
    let mut runs = Vec::with_capacity(inputs.len());

    for (idx, input) in inputs.iter().enumerate() {
        let rows = simulator.run(input);
        if inputs.len() > 1 {
            writeln!(out, "=== Input {} of {} ===", idx + 1, inputs.len())?;
        }
        writeln!(out, "{}", Report::new(input, &rows))?;
        runs.push(rows);
    }

    if let Some(path) = &cli.csv_out {
        export::write_rows_to_file(path, &runs)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        info!(path = %path.display(), "wrote CSV export");
    }

    Ok(runs)
}
