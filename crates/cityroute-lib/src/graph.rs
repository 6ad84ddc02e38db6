use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::location::{Location, LocationId};

/// Dense index of a vertex inside a [`Graph`].
pub type VertexIdx = usize;

/// Handle to a directed edge inside a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Directed edge within the city graph.
///
/// Every connection is stored twice, once per direction, and the two halves
/// point at each other through `reverse`.
#[derive(Debug, Clone)]
pub struct Edge {
    pub origin: VertexIdx,
    pub target: VertexIdx,
    /// Driving time; `f64::INFINITY` when cars cannot use the segment.
    pub driving: f64,
    pub walking: f64,
    pub reverse: EdgeId,
}

impl Edge {
    /// Whether a car can use this segment.
    pub fn is_drivable(&self) -> bool {
        self.driving.is_finite()
    }
}

/// City graph with an owned id index.
///
/// The graph is immutable once built. Per-search state lives in
/// [`crate::engine::ShortestPathTree`], so several searches can share one graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    locations: Vec<Location>,
    adjacency: Vec<Vec<EdgeId>>,
    edges: Vec<Edge>,
    index: HashMap<LocationId, VertexIdx>,
}

impl Graph {
    /// Start building a graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.locations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `id` names a location of this graph.
    pub fn contains(&self, id: LocationId) -> bool {
        self.index.contains_key(&id)
    }

    /// Translate a location id into its vertex index.
    pub fn vertex_index(&self, id: LocationId) -> Option<VertexIdx> {
        self.index.get(&id).copied()
    }

    /// Location stored at a vertex index.
    pub fn location(&self, vertex: VertexIdx) -> &Location {
        &self.locations[vertex]
    }

    /// Lookup a location by id.
    pub fn location_by_id(&self, id: LocationId) -> Option<&Location> {
        self.vertex_index(id).map(|vertex| self.location(vertex))
    }

    /// Location id stored at a vertex index.
    pub fn id_of(&self, vertex: VertexIdx) -> LocationId {
        self.locations[vertex].id
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge.index()]
    }

    /// Outgoing edges of a vertex in insertion order.
    pub fn edges_from(&self, vertex: VertexIdx) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.adjacency[vertex]
            .iter()
            .map(move |&edge| (edge, &self.edges[edge.index()]))
    }

    /// Directed edges `from -> to`. Empty when either id is unknown.
    pub fn edges_between(&self, from: LocationId, to: LocationId) -> Vec<EdgeId> {
        let (Some(origin), Some(target)) = (self.vertex_index(from), self.vertex_index(to)) else {
            return Vec::new();
        };
        self.edges_from(origin)
            .filter(|(_, edge)| edge.target == target)
            .map(|(id, _)| id)
            .collect()
    }
}

/// Incremental constructor for [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Add a location, rejecting duplicate ids.
    pub fn add_location(&mut self, location: Location) -> Result<VertexIdx> {
        if self.graph.index.contains_key(&location.id) {
            return Err(Error::DuplicateLocation { id: location.id });
        }
        let vertex = self.graph.locations.len();
        self.graph.index.insert(location.id, vertex);
        self.graph.locations.push(location);
        self.graph.adjacency.push(Vec::new());
        Ok(vertex)
    }

    /// Chainable variant of [`GraphBuilder::add_location`].
    pub fn location(mut self, location: Location) -> Result<Self> {
        self.add_location(location)?;
        Ok(self)
    }

    /// Connect two locations in both directions with shared costs.
    ///
    /// Returns the `a -> b` and `b -> a` halves.
    pub fn add_connection(
        &mut self,
        a: LocationId,
        b: LocationId,
        driving: f64,
        walking: f64,
    ) -> Result<(EdgeId, EdgeId)> {
        let origin = self
            .graph
            .vertex_index(a)
            .ok_or(Error::UnknownLocation { id: a })?;
        let target = self
            .graph
            .vertex_index(b)
            .ok_or(Error::UnknownLocation { id: b })?;

        let forward = EdgeId(self.graph.edges.len());
        let backward = EdgeId(forward.index() + 1);

        self.graph.edges.push(Edge {
            origin,
            target,
            driving,
            walking,
            reverse: backward,
        });
        self.graph.edges.push(Edge {
            origin: target,
            target: origin,
            driving,
            walking,
            reverse: forward,
        });
        self.graph.adjacency[origin].push(forward);
        self.graph.adjacency[target].push(backward);

        Ok((forward, backward))
    }

    /// Chainable variant of [`GraphBuilder::add_connection`].
    pub fn connection(mut self, a: LocationId, b: LocationId, driving: f64, walking: f64) -> Result<Self> {
        self.add_connection(a, b, driving, walking)?;
        Ok(self)
    }

    pub fn build(self) -> Graph {
        debug!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "built city graph"
        );
        self.graph
    }
}
