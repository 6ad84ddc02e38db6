//! Shared graphs and fixture helpers for integration tests.
//!
//! The fixture city under `docs/fixtures/city` looks like this (driving /
//! walking, every segment usable in both directions):
//!
//! ```text
//! Station(1) --5/60-- Market(2,P) --X/8-- Museum(3)
//!     |                   |                  |  |
//!   4/40                 2/15              8/12 4/5
//!     |                   |                  |  |
//! Harbour(4,P) ------------------------------+  |
//!                       Park(5) ----------------+
//! ```
//!
//! `Depot(6,P)` has no segments.

use std::fs::File;
use std::path::PathBuf;

use cityroute_lib::{graph_from_readers, Graph, Location};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Directory holding the fixture city tables.
#[allow(dead_code)]
pub fn city_dir() -> PathBuf {
    fixtures_dir().join("city")
}

/// Load the fixture city.
#[allow(dead_code)]
pub fn city() -> Graph {
    let dir = city_dir();
    let locations = File::open(dir.join("Locations.csv")).expect("open Locations.csv");
    let distances = File::open(dir.join("Distances.csv")).expect("open Distances.csv");
    graph_from_readers(locations, distances).expect("fixture city loads")
}

/// `1 -> 2 -> 3` with driving 5 and walking 10 on each segment.
#[allow(dead_code)]
pub fn line_graph() -> Graph {
    Graph::builder()
        .location(Location::new(1, "One", "A", false))
        .and_then(|b| b.location(Location::new(2, "Two", "B", false)))
        .and_then(|b| b.location(Location::new(3, "Three", "C", false)))
        .and_then(|b| b.connection(1, 2, 5.0, 10.0))
        .and_then(|b| b.connection(2, 3, 5.0, 10.0))
        .expect("line graph builds")
        .build()
}

/// Drive `1 -> 2`, park at 2, walk `2 -> 3`.
///
/// Segment 1-2 is effectively driving-only (walking 100) and 2-3 is
/// walking-only.
#[allow(dead_code)]
pub fn park_and_walk_graph() -> Graph {
    Graph::builder()
        .location(Location::new(1, "Home", "H", false))
        .and_then(|b| b.location(Location::new(2, "Garage", "G", true)))
        .and_then(|b| b.location(Location::new(3, "Office", "O", false)))
        .and_then(|b| b.connection(1, 2, 5.0, 100.0))
        .and_then(|b| b.connection(2, 3, f64::INFINITY, 8.0))
        .expect("park and walk graph builds")
        .build()
}

/// Square `1-2-3-4-1` plus the diagonal `1-3`, all driving cost 1 except the
/// diagonal (3). Two disjoint two-hop routes exist between 1 and 3.
#[allow(dead_code)]
pub fn square_graph() -> Graph {
    Graph::builder()
        .location(Location::new(1, "North", "N", true))
        .and_then(|b| b.location(Location::new(2, "East", "E", true)))
        .and_then(|b| b.location(Location::new(3, "South", "S", false)))
        .and_then(|b| b.location(Location::new(4, "West", "W", true)))
        .and_then(|b| b.connection(1, 2, 1.0, 4.0))
        .and_then(|b| b.connection(2, 3, 1.0, 4.0))
        .and_then(|b| b.connection(3, 4, 1.0, 4.0))
        .and_then(|b| b.connection(4, 1, 1.0, 4.0))
        .and_then(|b| b.connection(1, 3, 3.0, 9.0))
        .expect("square graph builds")
        .build()
}
