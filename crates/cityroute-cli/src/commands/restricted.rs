//! Restricted command handler: avoided locations and segments, optional waypoint.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use cityroute_cli::output::OutputFormat;
use cityroute_lib::{plan_route, LocationId, RestrictedRequest, RouteRequest, Segment};

use super::{emit, load_city};

/// Arguments for the restricted command.
#[derive(Debug, Clone)]
pub struct RestrictedCommandArgs {
    pub from: LocationId,
    pub to: LocationId,
    pub avoid_nodes: Vec<LocationId>,
    pub avoid_segments: Vec<Segment>,
    pub include: Option<LocationId>,
}

impl RestrictedCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        let mut request = RestrictedRequest::new(self.from, self.to)
            .avoid_nodes(self.avoid_nodes.iter().copied())
            .avoid_segments(self.avoid_segments.iter().copied());
        request.include = self.include;
        RouteRequest::Restricted(request)
    }
}

/// Handle the restricted subcommand.
pub fn handle_restricted_command(
    data_dir: Option<&Path>,
    format: OutputFormat,
    args: &RestrictedCommandArgs,
) -> Result<()> {
    let graph = load_city(data_dir)?;
    let report = plan_route(&graph, &args.to_request()).with_context(|| {
        format!(
            "failed to plan restricted route from {} to {}",
            args.from, args.to
        )
    })?;
    info!(
        from = args.from,
        to = args.to,
        avoided_nodes = args.avoid_nodes.len(),
        avoided_segments = args.avoid_segments.len(),
        include = ?args.include,
        found = report.is_success(),
        "restricted route planned"
    );
    emit(&report, format)
}
