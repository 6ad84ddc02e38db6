//! Eco command handler: drive to a parking location, then walk.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use tracing::info;

use cityroute_cli::output::OutputFormat;
use cityroute_lib::{plan_route, EcoRequest, LocationId, RouteRequest, Segment};

use super::{emit, load_city};

/// Arguments for the eco command.
#[derive(Debug, Clone)]
pub struct EcoCommandArgs {
    pub from: LocationId,
    pub to: LocationId,
    /// Longest acceptable walk, in minutes.
    pub max_walk: f64,
    pub avoid_nodes: Vec<LocationId>,
    pub avoid_segments: Vec<Segment>,
}

impl EcoCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::Eco(
            EcoRequest::new(self.from, self.to, self.max_walk)
                .avoid_nodes(self.avoid_nodes.iter().copied())
                .avoid_segments(self.avoid_segments.iter().copied()),
        )
    }
}

/// Handle the eco subcommand.
pub fn handle_eco_command(
    data_dir: Option<&Path>,
    format: OutputFormat,
    args: &EcoCommandArgs,
) -> Result<()> {
    ensure!(
        args.max_walk.is_finite() && args.max_walk >= 0.0,
        "--max-walk must be a non-negative number of minutes"
    );

    let graph = load_city(data_dir)?;
    let report = plan_route(&graph, &args.to_request())
        .with_context(|| format!("failed to plan eco route from {} to {}", args.from, args.to))?;
    info!(
        from = args.from,
        to = args.to,
        max_walk = args.max_walk,
        found = report.is_success(),
        "eco route planned"
    );
    emit(&report, format)
}
