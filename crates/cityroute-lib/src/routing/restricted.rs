//! Driving routes under exclusions, with an optional waypoint.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::engine::{shortest_paths, CostMode, SearchConstraints};
use crate::error::{LocationField, Result};
use crate::graph::Graph;
use crate::location::LocationId;
use crate::path::{reconstruct_backward, Route};

use super::{ensure_known, resolve_segments, Segment};

/// Fastest driving route under exclusions and an optional waypoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictedRequest {
    pub source: LocationId,
    pub destination: LocationId,
    pub avoid_nodes: HashSet<LocationId>,
    /// Directed segments; `(a, b)` bans `a -> b` but not `b -> a`.
    pub avoid_segments: Vec<Segment>,
    /// Location the route must pass through.
    pub include: Option<LocationId>,
}

impl RestrictedRequest {
    pub fn new(source: LocationId, destination: LocationId) -> Self {
        Self {
            source,
            destination,
            ..Self::default()
        }
    }

    pub fn avoid_nodes(mut self, nodes: impl IntoIterator<Item = LocationId>) -> Self {
        self.avoid_nodes.extend(nodes);
        self
    }

    pub fn avoid_segments(mut self, segments: impl IntoIterator<Item = Segment>) -> Self {
        self.avoid_segments.extend(segments);
        self
    }

    pub fn include(mut self, waypoint: LocationId) -> Self {
        self.include = Some(waypoint);
        self
    }

    /// Whether any exclusion or waypoint is present.
    pub fn has_restrictions(&self) -> bool {
        !self.avoid_nodes.is_empty() || !self.avoid_segments.is_empty() || self.include.is_some()
    }
}

/// Outcome of a [`RestrictedRequest`]; `route` is `None` when no path exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestrictedRoute {
    pub source: LocationId,
    pub destination: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<LocationId>,
    pub route: Option<Route>,
}

/// Compute the fastest driving route that honours the request's exclusions.
///
/// With a waypoint the route is two independent searches, `source -> include`
/// and `include -> destination`, joined at the waypoint. Either leg failing
/// fails the whole query.
pub fn plan_restricted(graph: &Graph, request: &RestrictedRequest) -> Result<RestrictedRoute> {
    ensure_known(graph, LocationField::Source, request.source)?;
    ensure_known(graph, LocationField::Destination, request.destination)?;
    if let Some(include) = request.include {
        ensure_known(graph, LocationField::Include, include)?;
    }

    let constraints = SearchConstraints::new()
        .with_avoided_vertices(request.avoid_nodes.iter().copied())
        .with_avoided_edges(resolve_segments(graph, &request.avoid_segments));

    let route = match request.include {
        None => driving_leg(graph, request.source, request.destination, &constraints)?,
        Some(include) => {
            match driving_leg(graph, request.source, include, &constraints)? {
                None => None,
                Some(first) => driving_leg(graph, include, request.destination, &constraints)?
                    .map(|second| first.join(second)),
            }
        }
    };

    debug!(
        source = request.source,
        destination = request.destination,
        include = ?request.include,
        found = route.is_some(),
        "restricted route planning finished"
    );

    Ok(RestrictedRoute {
        source: request.source,
        destination: request.destination,
        include: request.include,
        route,
    })
}

fn driving_leg(
    graph: &Graph,
    from: LocationId,
    to: LocationId,
    constraints: &SearchConstraints,
) -> Result<Option<Route>> {
    let tree = shortest_paths(graph, from, CostMode::Driving, constraints)?;
    Ok(reconstruct_backward(graph, &tree, from, to))
}
