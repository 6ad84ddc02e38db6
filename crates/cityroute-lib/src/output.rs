use std::fmt::Write;

use serde::Serialize;

use crate::error::{LocationField, Result};
use crate::location::LocationId;
use crate::path::Route;
use crate::routing::{EcoRoute, IndependentRoutes, RestrictedRoute, RouteMode};

/// Request refused because one of its identifiers is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRequest {
    pub mode: RouteMode,
    pub source: LocationId,
    pub destination: LocationId,
    pub field: LocationField,
    pub id: LocationId,
}

/// Structured outcome of any route query, ready to be rendered or serialised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteReport {
    Independent(IndependentRoutes),
    Restricted(RestrictedRoute),
    Eco(EcoRoute),
    Rejected(RejectedRequest),
}

impl RouteReport {
    pub fn source(&self) -> LocationId {
        match self {
            RouteReport::Independent(routes) => routes.source,
            RouteReport::Restricted(route) => route.source,
            RouteReport::Eco(route) => route.source,
            RouteReport::Rejected(rejected) => rejected.source,
        }
    }

    pub fn destination(&self) -> LocationId {
        match self {
            RouteReport::Independent(routes) => routes.destination,
            RouteReport::Restricted(route) => route.destination,
            RouteReport::Eco(route) => route.destination,
            RouteReport::Rejected(rejected) => rejected.destination,
        }
    }

    /// Whether the query produced the route it asked for.
    pub fn is_success(&self) -> bool {
        match self {
            RouteReport::Independent(routes) => routes.found_best(),
            RouteReport::Restricted(route) => route.route.is_some(),
            RouteReport::Eco(route) => route.found(),
            RouteReport::Rejected(_) => false,
        }
    }

    /// Render in the line-oriented `Label:value` format.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Source:{}", self.source());
        let _ = writeln!(buffer, "Destination:{}", self.destination());

        match self {
            RouteReport::Independent(routes) => render_independent(&mut buffer, routes),
            RouteReport::Restricted(route) => render_restricted(&mut buffer, route),
            RouteReport::Eco(route) => render_eco(&mut buffer, route),
            RouteReport::Rejected(rejected) => {
                let _ = writeln!(buffer, "{}", invalid_field_message(rejected.field));
            }
        }
        buffer
    }

    /// Serialise as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn render_independent(buffer: &mut String, routes: &IndependentRoutes) {
    let Some(best) = &routes.best else {
        buffer.push_str("No Path Found\n");
        return;
    };
    let _ = writeln!(buffer, "BestDrivingRoute:{}", format_route(best));
    match &routes.alternative {
        Some(alternative) => {
            let _ = writeln!(buffer, "AlternativeDrivingRoute:{}", format_route(alternative));
        }
        None => buffer.push_str("AlternativeDrivingRoute:No Alternative Path Found\n"),
    }
}

fn render_restricted(buffer: &mut String, route: &RestrictedRoute) {
    match &route.route {
        Some(found) => {
            let _ = writeln!(buffer, "RestrictedDrivingRoute:{}", format_route(found));
        }
        None => buffer.push_str("RestrictedDrivingRoute:No Path Found\n"),
    }
}

fn render_eco(buffer: &mut String, route: &EcoRoute) {
    match &route.legs {
        Some(legs) => {
            let _ = writeln!(buffer, "DrivingRoute:{}", format_route(&legs.driving));
            let _ = writeln!(buffer, "ParkingNode:{}", legs.parking);
            let _ = writeln!(buffer, "WalkingRoute:{}", format_route(&legs.walking));
            let _ = writeln!(buffer, "TotalTime:{}", format_cost(legs.total_time));
        }
        None => {
            buffer.push_str("DrivingRoute:none\n");
            buffer.push_str("ParkingNode:none\n");
            buffer.push_str("WalkingRoute:none\n");
            buffer.push_str("TotalTime:\n");
            let _ = writeln!(
                buffer,
                "Message:No possible route with max. walking time of {} minutes.",
                format_cost(route.max_walk_time)
            );
        }
    }
}

fn invalid_field_message(field: LocationField) -> &'static str {
    match field {
        LocationField::Source => "Origin ID is invalid!",
        LocationField::Destination => "Destiny ID is invalid!",
        LocationField::Include => "Include ID is invalid!",
    }
}

/// `1,2,3(10)`: comma separated steps followed by the cost.
pub fn format_route(route: &Route) -> String {
    let steps = route
        .steps
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{}({})", steps, format_cost(route.cost))
}

/// Costs print without trailing zeros and with at most six decimals.
pub fn format_cost(cost: f64) -> String {
    let mut text = format!("{cost:.6}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_cost_trims_zeros() {
        assert_eq!(format_cost(13.0), "13");
        assert_eq!(format_cost(12.5), "12.5");
        assert_eq!(format_cost(0.1 + 0.2), "0.3");
        assert_eq!(format_cost(0.0), "0");
    }

    #[test]
    fn format_route_joins_steps() {
        let route = Route {
            steps: vec![1, 2, 3],
            cost: 10.0,
            edges: Vec::new(),
        };
        assert_eq!(format_route(&route), "1,2,3(10)");
    }
}
