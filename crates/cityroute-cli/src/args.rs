//! Value parsers for list-valued command-line arguments.

use cityroute_lib::{parse_segments, LocationId, Segment};

/// Parse `1,2,3` into location ids. Blank entries are ignored.
pub fn parse_location_list(value: &str) -> Result<Vec<LocationId>, String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<LocationId>()
                .map_err(|_| format!("'{item}' is not a location id"))
        })
        .collect()
}

/// Parse `(1,2),(3,4)` into directed segments.
pub fn parse_segment_list(value: &str) -> Result<Vec<Segment>, String> {
    parse_segments(value)
}
