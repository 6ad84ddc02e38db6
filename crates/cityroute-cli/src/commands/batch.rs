//! Batch command handler: answer a `Label:value` query file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use cityroute_cli::output::OutputFormat;
use cityroute_lib::run_batch;

use super::load_city;

/// Answer file written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Arguments for the batch command.
#[derive(Debug, Clone)]
pub struct BatchCommandArgs {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Handle the batch subcommand.
///
/// The answer, including rejections of unknown ids, is always written to the
/// output file.
pub fn handle_batch_command(
    data_dir: Option<&Path>,
    format: OutputFormat,
    args: &BatchCommandArgs,
) -> Result<()> {
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read query file {}", args.input.display()))?;

    let graph = load_city(data_dir)?;
    let (request, report) = run_batch(&graph, &input)
        .with_context(|| format!("failed to answer query file {}", args.input.display()))?;
    if !request.diagnostics.is_empty() {
        warn!(
            count = request.diagnostics.len(),
            input = %args.input.display(),
            "query file had problems; affected fields kept their defaults"
        );
    }

    let rendered = format.render(&report)?;
    fs::write(&args.output, rendered)
        .with_context(|| format!("failed to write answer file {}", args.output.display()))?;

    info!(
        mode = %request.mode,
        found = report.is_success(),
        output = %args.output.display(),
        "batch query answered"
    );
    println!("Answer written to {}", args.output.display());
    Ok(())
}
