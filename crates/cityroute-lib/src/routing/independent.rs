//! Fastest driving route plus an alternative that avoids its interior.

use serde::Serialize;
use tracing::debug;

use crate::engine::{shortest_paths, CostMode, SearchConstraints};
use crate::error::{LocationField, Result};
use crate::graph::Graph;
use crate::location::LocationId;
use crate::path::{reconstruct_backward, Route};

use super::ensure_known;

/// Fastest driving route between two locations, optionally with an alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndependentRequest {
    pub source: LocationId,
    pub destination: LocationId,
    /// Also look for a second route avoiding the first one.
    pub alternative: bool,
}

impl IndependentRequest {
    pub fn new(source: LocationId, destination: LocationId) -> Self {
        Self {
            source,
            destination,
            alternative: true,
        }
    }

    pub fn without_alternative(mut self) -> Self {
        self.alternative = false;
        self
    }
}

/// Best and alternative routes for an [`IndependentRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndependentRoutes {
    pub source: LocationId,
    pub destination: LocationId,
    pub best: Option<Route>,
    pub alternative: Option<Route>,
}

impl IndependentRoutes {
    pub fn found_best(&self) -> bool {
        self.best.is_some()
    }

    pub fn found_alternative(&self) -> bool {
        self.alternative.is_some()
    }
}

/// Compute the fastest driving route and, when requested, an alternative.
///
/// The alternative may share only the endpoints with the best route: every
/// interior location of the best route is avoided, and so is every edge the
/// best route used. An alternative identical to the best route is discarded.
pub fn plan_independent(graph: &Graph, request: &IndependentRequest) -> Result<IndependentRoutes> {
    ensure_known(graph, LocationField::Source, request.source)?;
    ensure_known(graph, LocationField::Destination, request.destination)?;

    let tree = shortest_paths(
        graph,
        request.source,
        CostMode::Driving,
        &SearchConstraints::new(),
    )?;
    let best = reconstruct_backward(graph, &tree, request.source, request.destination);

    let alternative = match (&best, request.alternative) {
        (Some(best), true) => find_alternative(graph, request, best)?,
        _ => None,
    };

    debug!(
        source = request.source,
        destination = request.destination,
        best = best.is_some(),
        alternative = alternative.is_some(),
        "independent route planning finished"
    );

    Ok(IndependentRoutes {
        source: request.source,
        destination: request.destination,
        best,
        alternative,
    })
}

fn find_alternative(
    graph: &Graph,
    request: &IndependentRequest,
    best: &Route,
) -> Result<Option<Route>> {
    let constraints = SearchConstraints::new()
        .with_avoided_vertices(best.interior().iter().copied())
        .with_avoided_edges(best.edges.iter().copied());

    let tree = shortest_paths(graph, request.source, CostMode::Driving, &constraints)?;
    let alternative = reconstruct_backward(graph, &tree, request.source, request.destination);

    Ok(alternative.filter(|route| route.steps != best.steps))
}
