//! Route planning strategies implementing the Strategy pattern.
//!
//! The `RoutePlanner` trait lets [`super::plan_route`] run any strategy and
//! receive a uniform [`RouteReport`].

use crate::error::Result;
use crate::graph::Graph;
use crate::output::RouteReport;

use super::{
    plan_eco, plan_independent, plan_restricted, EcoRequest, IndependentRequest,
    RestrictedRequest, RouteMode, RouteRequest,
};

/// Trait for route planning strategies.
pub trait RoutePlanner {
    /// The orchestration implemented by this planner.
    fn mode(&self) -> RouteMode;

    /// Run the strategy against a freshly loaded graph.
    fn plan(&self, graph: &Graph) -> Result<RouteReport>;
}

impl RoutePlanner for IndependentRequest {
    fn mode(&self) -> RouteMode {
        RouteMode::Independent
    }

    fn plan(&self, graph: &Graph) -> Result<RouteReport> {
        plan_independent(graph, self).map(RouteReport::Independent)
    }
}

impl RoutePlanner for RestrictedRequest {
    fn mode(&self) -> RouteMode {
        RouteMode::Restricted
    }

    fn plan(&self, graph: &Graph) -> Result<RouteReport> {
        plan_restricted(graph, self).map(RouteReport::Restricted)
    }
}

impl RoutePlanner for EcoRequest {
    fn mode(&self) -> RouteMode {
        RouteMode::Eco
    }

    fn plan(&self, graph: &Graph) -> Result<RouteReport> {
        plan_eco(graph, self).map(RouteReport::Eco)
    }
}

/// Select the planner for a given request.
pub fn select_planner(request: &RouteRequest) -> &dyn RoutePlanner {
    match request {
        RouteRequest::Independent(inner) => inner,
        RouteRequest::Restricted(inner) => inner,
        RouteRequest::Eco(inner) => inner,
    }
}
