//! Park-and-walk planning: drive to a parking location, then walk.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::engine::{shortest_paths, CostMode, SearchConstraints, ShortestPathTree};
use crate::error::{LocationField, Result};
use crate::graph::{Graph, VertexIdx};
use crate::location::LocationId;
use crate::path::{reconstruct_backward, reconstruct_forward, Route};

use super::{ensure_known, resolve_segments, Segment};

/// Legs at or below this cost count as empty; parking there is not allowed.
pub const PARKING_EPSILON: f64 = 1e-9;

/// Drive to a parking location, then walk to the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct EcoRequest {
    pub source: LocationId,
    pub destination: LocationId,
    /// Upper bound for the walking leg, in the same unit as edge costs.
    pub max_walk_time: f64,
    pub avoid_nodes: HashSet<LocationId>,
    pub avoid_segments: Vec<Segment>,
}

impl EcoRequest {
    pub fn new(source: LocationId, destination: LocationId, max_walk_time: f64) -> Self {
        Self {
            source,
            destination,
            max_walk_time,
            avoid_nodes: HashSet::new(),
            avoid_segments: Vec::new(),
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
}

/// Chosen parking spot with both legs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcoLegs {
    pub parking: LocationId,
    pub driving: Route,
    pub walking: Route,
    pub total_time: f64,
}

/// Outcome of an [`EcoRequest`]; `legs` is `None` when no parking qualifies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcoRoute {
    pub source: LocationId,
    pub destination: LocationId,
    pub max_walk_time: f64,
    pub legs: Option<EcoLegs>,
}

impl EcoRoute {
    pub fn found(&self) -> bool {
        self.legs.is_some()
    }
}

/// Find the parking location minimising driving plus walking time.
///
/// Two searches are run: driving outward from the source, and walking outward
/// from the destination with reverse predecessors, which yields the walking
/// time from every location to the destination. Candidates must allow parking,
/// must not be an endpoint or avoided, need non-empty finite legs and must keep
/// the walk within `max_walk_time`. Equal totals prefer the longer walk.
pub fn plan_eco(graph: &Graph, request: &EcoRequest) -> Result<EcoRoute> {
    ensure_known(graph, LocationField::Source, request.source)?;
    ensure_known(graph, LocationField::Destination, request.destination)?;

    let constraints = SearchConstraints::new()
        .with_avoided_vertices(request.avoid_nodes.iter().copied())
        .with_avoided_edges(resolve_segments(graph, &request.avoid_segments));

    let drive = shortest_paths(graph, request.source, CostMode::Driving, &constraints)?;
    let walk = shortest_paths(
        graph,
        request.destination,
        CostMode::WalkingReverse,
        &constraints,
    )?;

    let mut route = EcoRoute {
        source: request.source,
        destination: request.destination,
        max_walk_time: request.max_walk_time,
        legs: None,
    };

    let Some(parking) = select_parking(graph, request, &drive, &walk) else {
        debug!(
            source = request.source,
            destination = request.destination,
            max_walk_time = request.max_walk_time,
            "no parking location satisfies the walking limit"
        );
        return Ok(route);
    };

    let parking_id = graph.id_of(parking);
    let driving = reconstruct_backward(graph, &drive, request.source, parking_id);
    let walking = reconstruct_forward(graph, &walk, parking_id, request.destination);

    match (driving, walking) {
        (Some(driving), Some(walking)) => {
            let total_time = driving.cost + walking.cost;
            debug!(parking = parking_id, total_time, "eco route found");
            route.legs = Some(EcoLegs {
                parking: parking_id,
                driving,
                walking,
                total_time,
            });
        }
        _ => warn!(parking = parking_id, "selected parking could not be reconstructed"),
    }

    Ok(route)
}

fn select_parking(
    graph: &Graph,
    request: &EcoRequest,
    drive: &ShortestPathTree,
    walk: &ShortestPathTree,
) -> Option<VertexIdx> {
    let mut best: Option<ParkingCandidate> = None;

    for (vertex, location) in graph.locations().iter().enumerate() {
        if !location.parking
            || location.id == request.source
            || location.id == request.destination
            || request.avoid_nodes.contains(&location.id)
        {
            continue;
        }

        let drive_time = drive.distance(vertex);
        let walk_time = walk.distance(vertex);
        if !drive_time.is_finite() || !walk_time.is_finite() {
            continue;
        }
        if drive_time <= PARKING_EPSILON || walk_time <= PARKING_EPSILON {
            continue;
        }
        if walk_time > request.max_walk_time {
            continue;
        }

        consider(
            &mut best,
            ParkingCandidate {
                vertex,
                total: drive_time + walk_time,
                walk: walk_time,
            },
        );
    }

    best.map(|candidate| candidate.vertex)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ParkingCandidate {
    vertex: VertexIdx,
    total: f64,
    walk: f64,
}

/// Keep the cheaper candidate. Totals within [`PARKING_EPSILON`] tie; a tie
/// goes to the longer walk and keeps the reference total unchanged.
fn consider(best: &mut Option<ParkingCandidate>, candidate: ParkingCandidate) {
    match best {
        None => *best = Some(candidate),
        Some(current) if (candidate.total - current.total).abs() < PARKING_EPSILON => {
            if candidate.walk > current.walk {
                current.vertex = candidate.vertex;
                current.walk = candidate.walk;
            }
        }
        Some(current) => {
            if candidate.total < current.total {
                *current = candidate;
            }
        }
    }
}
