//! City route planning library.
//!
//! This crate locates and loads a city dataset (locations and the segments
//! between them), builds an immutable directed graph, and answers route
//! queries on it: best and alternative driving routes, driving routes with
//! restrictions, and drive-then-walk routes through a parking location.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod batch;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod graph;
pub mod loader;
pub mod location;
pub mod output;
pub mod path;
pub mod queue;
pub mod routing;

pub use batch::{
    parse_batch, parse_segments, run_batch, BatchDiagnostic, BatchMode, BatchRequest,
};
pub use dataset::{default_data_dir, resolve_dataset, DatasetPaths, DATA_DIR_ENV};
pub use engine::{shortest_paths, CostMode, SearchConstraints, ShortestPathTree};
pub use error::{Error, LocationField, Result};
pub use graph::{Edge, EdgeId, Graph, GraphBuilder, VertexIdx};
pub use loader::{graph_from_readers, load_graph};
pub use location::{Location, LocationId};
pub use output::{format_cost, format_route, RejectedRequest, RouteReport};
pub use path::{reconstruct, reconstruct_backward, reconstruct_forward, Route};
pub use queue::MutablePriorityQueue;
pub use routing::{
    plan_eco, plan_independent, plan_restricted, plan_route, select_planner, EcoLegs,
    EcoRequest, EcoRoute, IndependentRequest, IndependentRoutes, RestrictedRequest,
    RestrictedRoute, RouteMode, RoutePlanner, RouteRequest, Segment, PARKING_EPSILON,
};
