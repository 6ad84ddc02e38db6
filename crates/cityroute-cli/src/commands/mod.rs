// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments and dispatches
// to these handlers.

pub mod batch;
pub mod eco;
pub mod restricted;
pub mod route;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use cityroute_cli::output::OutputFormat;
use cityroute_lib::{load_graph, resolve_dataset, Graph, RouteReport};

/// Resolve the dataset and load a fresh graph for one query.
pub fn load_city(data_dir: Option<&Path>) -> Result<Graph> {
    let paths = resolve_dataset(data_dir).context("failed to locate the city dataset")?;
    load_graph(&paths)
        .with_context(|| format!("failed to load dataset from {}", paths.locations.display()))
}

/// Print a report to stdout; rejected requests become an error after printing.
pub fn emit(report: &RouteReport, format: OutputFormat) -> Result<()> {
    format.write_report(&mut io::stdout().lock(), report)?;
    match report {
        RouteReport::Rejected(rejected) => Err(anyhow::anyhow!(
            "{} id {} is not a known location",
            rejected.field,
            rejected.id
        )),
        _ => Ok(()),
    }
}
