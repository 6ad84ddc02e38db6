use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::location::LocationId;

/// Convenient result alias for the cityroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Request field that carried an identifier unknown to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationField {
    Source,
    Destination,
    Include,
}

impl fmt::Display for LocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            LocationField::Source => "source",
            LocationField::Destination => "destination",
            LocationField::Include => "include",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset files could not be located at the resolved directory.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset")]
    DataDirUnavailable,

    /// A row of the locations table could not be parsed.
    #[error("invalid location record at row {row}: {message}")]
    InvalidLocationRecord { row: u64, message: String },

    /// A row of the distances table could not be parsed.
    #[error("invalid distance record at row {row}: {message}")]
    InvalidDistanceRecord { row: u64, message: String },

    /// Two location rows share the same identifier.
    #[error("duplicate location id encountered: {id}")]
    DuplicateLocation { id: LocationId },

    /// A search was started from a location the graph does not contain.
    #[error("unknown location id: {id}")]
    UnknownLocation { id: LocationId },

    /// A route request referenced an identifier the graph does not contain.
    #[error("{field} id {id} is invalid")]
    InvalidLocation { field: LocationField, id: LocationId },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
