//! Route command handler for best and alternative driving routes.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use cityroute_cli::output::OutputFormat;
use cityroute_lib::{plan_route, IndependentRequest, LocationId, RouteRequest};

use super::{emit, load_city};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: LocationId,
    pub to: LocationId,
    /// Skip the second search for an alternative route.
    pub no_alternative: bool,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library request.
    pub fn to_request(&self) -> RouteRequest {
        let request = IndependentRequest::new(self.from, self.to);
        RouteRequest::Independent(if self.no_alternative {
            request.without_alternative()
        } else {
            request
        })
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    data_dir: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let graph = load_city(data_dir)?;
    let report = plan_route(&graph, &args.to_request())
        .with_context(|| format!("failed to plan route from {} to {}", args.from, args.to))?;
    info!(from = args.from, to = args.to, found = report.is_success(), "route planned");
    emit(&report, format)
}
