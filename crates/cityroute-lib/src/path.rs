//! Routes rebuilt from shortest-path trees.

use serde::Serialize;
use tracing::warn;

use crate::engine::{CostMode, ShortestPathTree};
use crate::graph::{EdgeId, Graph};
use crate::location::LocationId;

/// Ordered node sequence with its accumulated cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub steps: Vec<LocationId>,
    pub cost: f64,
    /// Directed edges traversed, in travel order.
    #[serde(skip)]
    pub edges: Vec<EdgeId>,
}

impl Route {
    /// Route that starts and ends at the same location.
    pub fn trivial(id: LocationId) -> Self {
        Self {
            steps: vec![id],
            cost: 0.0,
            edges: Vec::new(),
        }
    }

    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<LocationId> {
        self.steps.first().copied()
    }

    pub fn destination(&self) -> Option<LocationId> {
        self.steps.last().copied()
    }

    /// Steps strictly between the two endpoints.
    pub fn interior(&self) -> &[LocationId] {
        if self.steps.len() <= 2 {
            return &[];
        }
        &self.steps[1..self.steps.len() - 1]
    }

    /// Append a route that starts where this one ends, keeping the junction
    /// once and summing both costs.
    pub fn join(mut self, next: Route) -> Route {
        self.steps.extend(next.steps.into_iter().skip(1));
        self.edges.extend(next.edges);
        self.cost += next.cost;
        self
    }
}

/// Rebuild the route `origin -> destination` from a tree rooted at `origin`.
///
/// Predecessor links are followed from the destination back to the root. An
/// unreachable destination, or a broken chain, yields `None`.
pub fn reconstruct_backward(
    graph: &Graph,
    tree: &ShortestPathTree,
    origin: LocationId,
    destination: LocationId,
) -> Option<Route> {
    if tree.mode().records_reverse() {
        warn!(%origin, %destination, "backward reconstruction on a reverse tree");
        return None;
    }
    let start = graph.vertex_index(origin)?;
    let mut current = graph.vertex_index(destination)?;
    if !tree.is_reachable(current) {
        return None;
    }

    let mut steps = vec![destination];
    let mut edges = Vec::new();
    for _ in 0..graph.vertex_count() {
        if current == start {
            steps.reverse();
            edges.reverse();
            // Same summation order as the search, so the cost matches the
            // tree's distance exactly.
            let cost = sum_costs(graph, tree.mode(), edges.iter());
            return Some(Route { steps, cost, edges });
        }
        let edge_id = tree.predecessor(current)?;
        let edge = graph.edge(edge_id);
        edges.push(edge_id);
        current = edge.origin;
        steps.push(graph.id_of(current));
    }

    warn!(%origin, %destination, "predecessor chain does not reach the origin");
    None
}

/// Rebuild the route `start -> end` from a reverse tree rooted at `end`.
///
/// Each vertex of such a tree stores the first edge of its way towards the
/// root, so the walk follows edge targets forward.
pub fn reconstruct_forward(
    graph: &Graph,
    tree: &ShortestPathTree,
    start: LocationId,
    end: LocationId,
) -> Option<Route> {
    if !tree.mode().records_reverse() {
        warn!(%start, %end, "forward reconstruction on a forward tree");
        return None;
    }
    let goal = graph.vertex_index(end)?;
    let mut current = graph.vertex_index(start)?;
    if !tree.is_reachable(current) {
        return None;
    }

    let mut steps = vec![start];
    let mut edges = Vec::new();
    for _ in 0..graph.vertex_count() {
        if current == goal {
            let cost = sum_costs(graph, tree.mode(), edges.iter().rev());
            return Some(Route { steps, cost, edges });
        }
        let edge_id = tree.predecessor(current)?;
        let edge = graph.edge(edge_id);
        edges.push(edge_id);
        current = edge.target;
        steps.push(graph.id_of(current));
    }

    warn!(%start, %end, "successor chain does not reach the root");
    None
}

/// Rebuild `origin -> destination` with whichever walk matches the tree.
///
/// Forward trees must be rooted at `origin`; reverse trees at `destination`.
pub fn reconstruct(
    graph: &Graph,
    tree: &ShortestPathTree,
    origin: LocationId,
    destination: LocationId,
) -> Option<Route> {
    match tree.mode() {
        CostMode::WalkingReverse => reconstruct_forward(graph, tree, origin, destination),
        CostMode::Driving | CostMode::Walking => {
            reconstruct_backward(graph, tree, origin, destination)
        }
    }
}

fn sum_costs<'a>(graph: &Graph, mode: CostMode, edges: impl Iterator<Item = &'a EdgeId>) -> f64 {
    edges.fold(0.0, |total, &edge| total + mode.cost(graph.edge(edge)))
}
