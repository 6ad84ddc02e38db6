//! Single-source shortest-time search over the city graph.
//!
//! [`shortest_paths`] runs an exact Dijkstra search and returns a
//! [`ShortestPathTree`] holding the tentative distance and predecessor edge of
//! every vertex. The graph itself is never mutated: everything a run must avoid
//! is passed in through [`SearchConstraints`].

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, Graph, VertexIdx};
use crate::location::LocationId;
use crate::queue::MutablePriorityQueue;

/// Which edge weight a search reads and how it records predecessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostMode {
    /// Driving times; walking-only segments are skipped.
    Driving,
    /// Walking times, predecessors recorded in search direction.
    Walking,
    /// Walking times searched outward from the destination. Each vertex records
    /// the reverse edge, i.e. the first step of its walk towards the root.
    WalkingReverse,
}

impl CostMode {
    /// Cost of traversing `edge` under this mode.
    pub fn cost(self, edge: &Edge) -> f64 {
        match self {
            CostMode::Driving => edge.driving,
            CostMode::Walking | CostMode::WalkingReverse => edge.walking,
        }
    }

    /// Whether predecessor links point away from the root.
    pub fn records_reverse(self) -> bool {
        matches!(self, CostMode::WalkingReverse)
    }
}

impl fmt::Display for CostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostMode::Driving => "driving",
            CostMode::Walking => "walking",
            CostMode::WalkingReverse => "walking-reverse",
        };
        f.write_str(value)
    }
}

/// Vertices and directed edges a single search must not use.
#[derive(Debug, Default, Clone)]
pub struct SearchConstraints {
    /// Locations treated as unreachable.
    pub avoided_vertices: HashSet<LocationId>,
    /// Directed edges, in travel direction, that must not be traversed.
    pub avoided_edges: HashSet<EdgeId>,
}

impl SearchConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_avoided_vertices(mut self, vertices: impl IntoIterator<Item = LocationId>) -> Self {
        self.avoided_vertices.extend(vertices);
        self
    }

    pub fn with_avoided_edges(mut self, edges: impl IntoIterator<Item = EdgeId>) -> Self {
        self.avoided_edges.extend(edges);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.avoided_vertices.is_empty() && self.avoided_edges.is_empty()
    }

    fn allows(&self, graph: &Graph, travelled: EdgeId, edge: &Edge) -> bool {
        if self.avoided_edges.contains(&travelled) {
            return false;
        }
        !self.avoided_vertices.contains(&graph.id_of(edge.target))
    }
}

/// Result of one Dijkstra run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    root: VertexIdx,
    root_id: LocationId,
    mode: CostMode,
    dist: Vec<f64>,
    pred: Vec<Option<EdgeId>>,
}

impl ShortestPathTree {
    pub fn root(&self) -> VertexIdx {
        self.root
    }

    pub fn root_id(&self) -> LocationId {
        self.root_id
    }

    pub fn mode(&self) -> CostMode {
        self.mode
    }

    /// Shortest known cost between the root and `vertex`; `f64::INFINITY` when
    /// unreachable.
    pub fn distance(&self, vertex: VertexIdx) -> f64 {
        self.dist[vertex]
    }

    /// Edge recorded for `vertex` on its best path, if any.
    pub fn predecessor(&self, vertex: VertexIdx) -> Option<EdgeId> {
        self.pred[vertex]
    }

    pub fn is_reachable(&self, vertex: VertexIdx) -> bool {
        self.dist[vertex].is_finite()
    }

    /// Distance keyed by location id. `None` for ids outside the graph.
    pub fn distance_to(&self, graph: &Graph, id: LocationId) -> Option<f64> {
        graph.vertex_index(id).map(|vertex| self.distance(vertex))
    }
}

/// Run Dijkstra from `origin` under the given cost mode and constraints.
///
/// Relaxation is strict (`<`): of several equal-cost paths, the first one
/// discovered in adjacency order wins. Edges whose selected cost is infinite
/// are never relaxed. If `origin` itself is avoided the tree contains only the
/// root at distance zero.
pub fn shortest_paths(
    graph: &Graph,
    origin: LocationId,
    mode: CostMode,
    constraints: &SearchConstraints,
) -> Result<ShortestPathTree> {
    let root = graph
        .vertex_index(origin)
        .ok_or(Error::UnknownLocation { id: origin })?;

    let vertex_count = graph.vertex_count();
    let mut tree = ShortestPathTree {
        root,
        root_id: origin,
        mode,
        dist: vec![f64::INFINITY; vertex_count],
        pred: vec![None; vertex_count],
    };
    tree.dist[root] = 0.0;

    if constraints.avoided_vertices.contains(&origin) {
        debug!(origin, %mode, "search origin is avoided; nothing reachable");
        return Ok(tree);
    }

    let mut queue = MutablePriorityQueue::new(vertex_count);
    queue.insert(root, 0.0);
    let mut settled = 0usize;

    while let Some((vertex, _)) = queue.extract_min() {
        settled += 1;
        let base = tree.dist[vertex];

        for (edge_id, edge) in graph.edges_from(vertex) {
            let travelled = if mode.records_reverse() {
                edge.reverse
            } else {
                edge_id
            };
            if !constraints.allows(graph, travelled, edge) {
                continue;
            }

            let cost = mode.cost(edge);
            if !cost.is_finite() {
                continue;
            }

            let candidate = base + cost;
            let target = edge.target;
            if candidate < tree.dist[target] {
                tree.dist[target] = candidate;
                tree.pred[target] = Some(travelled);
                if queue.contains(target) {
                    queue.decrease_key(target, candidate);
                } else {
                    queue.insert(target, candidate);
                }
            }
        }
    }

    debug!(origin, %mode, settled, "shortest path search finished");
    Ok(tree)
}
