//! CSV loading of the city graph.
//!
//! Two tables describe a city: `Locations.csv` (`name, id, code, parking`) and
//! `Distances.csv` (`source code, destination code, driving, walking`). Both
//! carry a header row; columns are read by position.

use std::collections::HashMap;
use std::fs;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::dataset::DatasetPaths;
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder};
use crate::location::{Location, LocationId};

/// Driving cost marker for segments cars cannot use.
pub const NO_DRIVING_MARKER: &str = "X";

/// Load the graph described by the tables at `paths`.
pub fn load_graph(paths: &DatasetPaths) -> Result<Graph> {
    let locations = fs::File::open(&paths.locations)?;
    let distances = fs::File::open(&paths.distances)?;
    let graph = graph_from_readers(locations, distances)?;
    info!(
        locations = graph.vertex_count(),
        edges = graph.edge_count(),
        path = %paths.locations.display(),
        "loaded city graph"
    );
    Ok(graph)
}

/// Build a graph from any two CSV sources.
pub fn graph_from_readers<L: Read, D: Read>(locations: L, distances: D) -> Result<Graph> {
    let mut builder = Graph::builder();
    let codes = read_locations(&mut builder, locations)?;
    read_distances(&mut builder, &codes, distances)?;
    Ok(builder.build())
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(Trim::Fields)
        .flexible(true)
        .from_reader(reader)
}

fn field<'r>(record: &'r StringRecord, index: usize) -> Option<&'r str> {
    record.get(index).map(str::trim)
}

fn read_locations<R: Read>(
    builder: &mut GraphBuilder,
    reader: R,
) -> Result<HashMap<String, LocationId>> {
    let mut codes = HashMap::new();
    let mut row: u64 = 1;

    for record in csv_reader(reader).records() {
        row += 1;
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        let missing = |column: &str| Error::InvalidLocationRecord {
            row,
            message: format!("missing {column}"),
        };
        let name = field(&record, 0).ok_or_else(|| missing("name"))?;
        let id = field(&record, 1).ok_or_else(|| missing("id"))?;
        let code = field(&record, 2).ok_or_else(|| missing("code"))?;
        let parking = field(&record, 3).ok_or_else(|| missing("parking"))?;

        let id: LocationId = id.parse().map_err(|err| Error::InvalidLocationRecord {
            row,
            message: format!("invalid id '{id}': {err}"),
        })?;

        if let Some(previous) = codes.get(code) {
            return Err(Error::InvalidLocationRecord {
                row,
                message: format!("duplicate code '{code}' (already used by id {previous})"),
            });
        }

        builder.add_location(Location::new(id, name, code, parking == "1"))?;
        codes.insert(code.to_string(), id);
    }

    debug!(count = codes.len(), "read locations table");
    Ok(codes)
}

fn read_distances<R: Read>(
    builder: &mut GraphBuilder,
    codes: &HashMap<String, LocationId>,
    reader: R,
) -> Result<()> {
    let mut row: u64 = 1;
    let mut connections = 0usize;

    for record in csv_reader(reader).records() {
        row += 1;
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        let missing = |column: &str| Error::InvalidDistanceRecord {
            row,
            message: format!("missing {column}"),
        };
        let source = field(&record, 0).ok_or_else(|| missing("source code"))?;
        let destination = field(&record, 1).ok_or_else(|| missing("destination code"))?;
        let driving = field(&record, 2).ok_or_else(|| missing("driving"))?;
        let walking = field(&record, 3).ok_or_else(|| missing("walking"))?;

        let driving = parse_driving(driving).map_err(|message| Error::InvalidDistanceRecord {
            row,
            message,
        })?;
        let walking = parse_walking(walking).map_err(|message| Error::InvalidDistanceRecord {
            row,
            message,
        })?;

        let (Some(&a), Some(&b)) = (codes.get(source), codes.get(destination)) else {
            warn!(row, source, destination, "skipping distance with unknown location code");
            continue;
        };

        builder.add_connection(a, b, driving, walking)?;
        connections += 1;
    }

    debug!(connections, "read distances table");
    Ok(())
}

/// Costs must be finite and non-negative; only the `X` marker means infinity.
fn parse_driving(value: &str) -> std::result::Result<f64, String> {
    if value.eq_ignore_ascii_case(NO_DRIVING_MARKER) {
        return Ok(f64::INFINITY);
    }
    parse_cost("driving", value)
}

fn parse_walking(value: &str) -> std::result::Result<f64, String> {
    parse_cost("walking", value)
}

fn parse_cost(kind: &str, value: &str) -> std::result::Result<f64, String> {
    let cost = value
        .parse::<f64>()
        .map_err(|err| format!("invalid {kind} time '{value}': {err}"))?;
    if !cost.is_finite() || cost < 0.0 {
        return Err(format!(
            "invalid {kind} time '{value}': must be a finite, non-negative number"
        ));
    }
    Ok(cost)
}
