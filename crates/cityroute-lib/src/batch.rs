//! Line-oriented `Label:value` query files.
//!
//! ```text
//! Mode:driving
//! Source:5
//! Destination:4
//! AvoidNodes:2,3
//! AvoidSegments:(1,2),(4,7)
//! IncludeNode:6
//! ```
//!
//! Problems never abort parsing: they are collected as [`BatchDiagnostic`]s
//! and the affected field keeps its default.

use std::collections::BTreeSet;
use std::fmt;

use tracing::warn;

use crate::error::Result;
use crate::graph::Graph;
use crate::location::LocationId;
use crate::output::RouteReport;
use crate::routing::{
    plan_route, EcoRequest, IndependentRequest, RestrictedRequest, RouteRequest, Segment,
};

/// Placeholder id used when a file omits `Source` or `Destination`. As an
/// `IncludeNode` value it means no waypoint.
pub const UNSET_LOCATION: LocationId = -1;

/// Travel mode named by the `Mode` label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchMode {
    /// Driving only; restricted when any restriction is present.
    #[default]
    Driving,
    /// Driving to a parking location, then walking.
    DrivingWalking,
}

impl BatchMode {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "driving" => Some(BatchMode::Driving),
            "driving-walking" | "driving_walking" => Some(BatchMode::DrivingWalking),
            _ => None,
        }
    }
}

impl fmt::Display for BatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            BatchMode::Driving => "driving",
            BatchMode::DrivingWalking => "driving-walking",
        };
        f.write_str(value)
    }
}

/// Problem found while reading a query file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDiagnostic {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for BatchDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Query read from a batch file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchRequest {
    pub mode: BatchMode,
    pub source: Option<LocationId>,
    pub destination: Option<LocationId>,
    pub avoid_nodes: BTreeSet<LocationId>,
    pub avoid_segments: Vec<Segment>,
    pub include_node: Option<LocationId>,
    pub max_walk_time: Option<i64>,
    pub diagnostics: Vec<BatchDiagnostic>,
}

impl BatchRequest {
    pub fn has_restrictions(&self) -> bool {
        !self.avoid_nodes.is_empty() || !self.avoid_segments.is_empty() || self.include_node.is_some()
    }

    /// Pick the strategy matching the parsed fields.
    pub fn to_route_request(&self) -> RouteRequest {
        let source = self.source.unwrap_or(UNSET_LOCATION);
        let destination = self.destination.unwrap_or(UNSET_LOCATION);

        match self.mode {
            BatchMode::DrivingWalking => RouteRequest::Eco(
                EcoRequest::new(source, destination, self.max_walk_time.unwrap_or(0) as f64)
                    .avoid_nodes(self.avoid_nodes.iter().copied())
                    .avoid_segments(self.avoid_segments.iter().copied()),
            ),
            BatchMode::Driving if self.has_restrictions() => {
                let mut request = RestrictedRequest::new(source, destination)
                    .avoid_nodes(self.avoid_nodes.iter().copied())
                    .avoid_segments(self.avoid_segments.iter().copied());
                request.include = self.include_node;
                RouteRequest::Restricted(request)
            }
            BatchMode::Driving => RouteRequest::Independent(IndependentRequest::new(source, destination)),
        }
    }

    fn note(&mut self, line: usize, message: String) {
        warn!(line, %message, "batch input problem");
        self.diagnostics.push(BatchDiagnostic { line, message });
    }
}

/// Parse a whole query file.
pub fn parse_batch(input: &str) -> BatchRequest {
    let mut request = BatchRequest::default();
    let mut include_line = None;

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let Some((label, value)) = raw.split_once(':') else {
            request.note(line, format!("invalid line format: {}", raw.trim()));
            continue;
        };
        let label = label.trim();
        let value = value.trim();

        match label {
            "Mode" => match BatchMode::parse(value) {
                Some(mode) => request.mode = mode,
                None => request.note(line, format!("invalid Mode: {value}")),
            },
            "Source" => match value.parse() {
                Ok(id) => request.source = Some(id),
                Err(_) => request.note(line, format!("invalid Source: {value}")),
            },
            "Destination" => match value.parse() {
                Ok(id) => request.destination = Some(id),
                Err(_) => request.note(line, format!("invalid Destination: {value}")),
            },
            "AvoidNodes" => {
                for node in value.split(',').map(str::trim).filter(|node| !node.is_empty()) {
                    match node.parse() {
                        Ok(id) => {
                            request.avoid_nodes.insert(id);
                        }
                        Err(_) => request.note(line, format!("invalid AvoidNode: {node}")),
                    }
                }
            }
            "AvoidSegments" => match parse_segments(value) {
                Ok(segments) => request.avoid_segments.extend(segments),
                Err(message) => request.note(line, message),
            },
            "IncludeNode" => {
                if !value.is_empty() {
                    match value.parse() {
                        Ok(UNSET_LOCATION) => request.include_node = None,
                        Ok(id) => {
                            request.include_node = Some(id);
                            include_line = Some(line);
                        }
                        Err(_) => request.note(line, format!("invalid IncludeNode: {value}")),
                    }
                }
            }
            "MaxWalkTime" => match value.parse() {
                Ok(minutes) => request.max_walk_time = Some(minutes),
                Err(_) => request.note(line, format!("invalid MaxWalkTime: {value}")),
            },
            other => request.note(line, format!("unknown label: {other}")),
        }
    }

    if request.mode == BatchMode::DrivingWalking && request.include_node.is_some() {
        if let Some(line) = include_line {
            request.note(line, "IncludeNode ignored in driving-walking mode".to_string());
        }
    }

    request
}

/// Parse `(a,b),(c,d)` into directed segments. Empty input yields no segments.
pub fn parse_segments(value: &str) -> std::result::Result<Vec<Segment>, String> {
    let mut segments = Vec::new();
    let mut rest = value.trim();

    while !rest.is_empty() {
        let Some(open) = rest.strip_prefix('(') else {
            return Err(format!("invalid AvoidSegments: expected '(' in '{value}'"));
        };
        let Some((inner, tail)) = open.split_once(')') else {
            return Err(format!("invalid AvoidSegments: missing ')' in '{value}'"));
        };
        let Some((from, to)) = inner.split_once(',') else {
            return Err(format!("invalid AvoidSegments: expected 'from,to' in '({inner})'"));
        };
        let from = from
            .trim()
            .parse()
            .map_err(|_| format!("invalid AvoidSegments: bad id '{}'", from.trim()))?;
        let to = to
            .trim()
            .parse()
            .map_err(|_| format!("invalid AvoidSegments: bad id '{}'", to.trim()))?;
        segments.push((from, to));

        rest = tail.trim_start();
        rest = rest.strip_prefix(',').unwrap_or(rest).trim_start();
    }

    Ok(segments)
}

/// Parse a query file and plan it against `graph`.
pub fn run_batch(graph: &Graph, input: &str) -> Result<(BatchRequest, RouteReport)> {
    let request = parse_batch(input);
    let report = plan_route(graph, &request.to_route_request())?;
    Ok((request, report))
}
