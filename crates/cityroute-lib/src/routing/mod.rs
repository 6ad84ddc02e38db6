//! Route planning on top of the shortest-path engine.
//!
//! This module provides:
//! - [`IndependentRequest`] / [`plan_independent`] - fastest route plus one alternative
//! - [`RestrictedRequest`] / [`plan_restricted`] - avoided nodes and segments, optional waypoint
//! - [`EcoRequest`] / [`plan_eco`] - drive to a parking spot, then walk
//! - [`plan_route`] - dispatch a [`RouteRequest`] and wrap the result in a [`RouteReport`]
//!
//! # Strategy Pattern
//!
//! Each request type implements [`RoutePlanner`], so the dispatcher does not need
//! to know how a strategy combines engine runs.
//!
//! # Example
//!
//! ```ignore
//! use cityroute_lib::{load_graph, plan_route, resolve_dataset, IndependentRequest, RouteRequest};
//!
//! let graph = load_graph(&resolve_dataset(None)?)?;
//! let report = plan_route(&graph, &RouteRequest::Independent(IndependentRequest::new(1, 8)))?;
//! print!("{}", report.render_text());
//! ```

mod eco;
mod independent;
mod planner;
mod restricted;

pub use eco::{plan_eco, EcoLegs, EcoRequest, EcoRoute, PARKING_EPSILON};
pub use independent::{plan_independent, IndependentRequest, IndependentRoutes};
pub use planner::{select_planner, RoutePlanner};
pub use restricted::{plan_restricted, RestrictedRequest, RestrictedRoute};

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, LocationField, Result};
use crate::graph::{EdgeId, Graph};
use crate::location::LocationId;
use crate::output::{RejectedRequest, RouteReport};

/// Directed `(from, to)` pair naming a segment to avoid.
pub type Segment = (LocationId, LocationId);

/// Query orchestration requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Fastest driving route and an alternative.
    Independent,
    /// Fastest driving route under exclusions and an optional waypoint.
    Restricted,
    /// Driving to a parking location, then walking.
    Eco,
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMode::Independent => "independent",
            RouteMode::Restricted => "restricted",
            RouteMode::Eco => "eco",
        };
        f.write_str(value)
    }
}

/// Any supported route query.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteRequest {
    Independent(IndependentRequest),
    Restricted(RestrictedRequest),
    Eco(EcoRequest),
}

impl RouteRequest {
    pub fn mode(&self) -> RouteMode {
        match self {
            RouteRequest::Independent(_) => RouteMode::Independent,
            RouteRequest::Restricted(_) => RouteMode::Restricted,
            RouteRequest::Eco(_) => RouteMode::Eco,
        }
    }

    pub fn source(&self) -> LocationId {
        match self {
            RouteRequest::Independent(request) => request.source,
            RouteRequest::Restricted(request) => request.source,
            RouteRequest::Eco(request) => request.source,
        }
    }

    pub fn destination(&self) -> LocationId {
        match self {
            RouteRequest::Independent(request) => request.destination,
            RouteRequest::Restricted(request) => request.destination,
            RouteRequest::Eco(request) => request.destination,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Fail with a per-field error when `id` is not part of the graph.
pub(crate) fn ensure_known(graph: &Graph, field: LocationField, id: LocationId) -> Result<()> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(Error::InvalidLocation { field, id })
    }
}

/// Resolve avoided segments to directed edge ids.
///
/// Segments whose origin is unknown are skipped; only the `from -> to`
/// direction is excluded.
pub(crate) fn resolve_segments(graph: &Graph, segments: &[Segment]) -> HashSet<EdgeId> {
    let mut edges = HashSet::new();
    for &(from, to) in segments {
        if !graph.contains(from) {
            debug!(from, to, "skipping avoided segment with unknown origin");
            continue;
        }
        edges.extend(graph.edges_between(from, to));
    }
    edges
}

// =============================================================================
// Main Entry Point
// =============================================================================

/// Run the strategy matching `request`.
///
/// Unknown identifiers do not abort the call: they come back as
/// [`RouteReport::Rejected`] so callers can render them like any other outcome.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RouteReport> {
    let planner = select_planner(request);
    debug!(mode = %planner.mode(), "planning route");
    match planner.plan(graph) {
        Err(Error::InvalidLocation { field, id }) => Ok(RouteReport::Rejected(RejectedRequest {
            mode: request.mode(),
            source: request.source(),
            destination: request.destination(),
            field,
            id,
        })),
        other => other,
    }
}
