use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "CITYROUTE_DATA_DIR";

/// File name of the locations table.
pub const LOCATIONS_FILENAME: &str = "Locations.csv";

/// File name of the distances table.
pub const DISTANCES_FILENAME: &str = "Distances.csv";

/// Directory searched relative to the working directory.
const LOCAL_DATA_DIR: &str = "data";

/// Paths to the two tables describing a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub locations: PathBuf,
    pub distances: PathBuf,
}

impl DatasetPaths {
    /// Paths to the standard file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            locations: dir.join(LOCATIONS_FILENAME),
            distances: dir.join(DISTANCES_FILENAME),
        }
    }

    /// Whether both tables exist.
    pub fn exists(&self) -> bool {
        self.locations.is_file() && self.distances.is_file()
    }
}

/// Resolve the platform-specific data directory.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "cityroute", "cityroute").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Locate the dataset.
///
/// Resolution order: the explicit `target` directory, the
/// [`DATA_DIR_ENV`] environment variable, `./data`, and finally the
/// platform data directory. An explicit or environment-provided directory is
/// used as-is and must contain both tables.
pub fn resolve_dataset(target: Option<&Path>) -> Result<DatasetPaths> {
    if let Some(dir) = target {
        return require_dataset(dir);
    }

    if let Ok(value) = env::var(DATA_DIR_ENV) {
        if !value.trim().is_empty() {
            debug!(env = DATA_DIR_ENV, dir = %value, "using dataset directory from environment");
            return require_dataset(Path::new(value.trim()));
        }
    }

    let local = DatasetPaths::in_dir(Path::new(LOCAL_DATA_DIR));
    if local.exists() {
        debug!(dir = LOCAL_DATA_DIR, "using local dataset directory");
        return Ok(local);
    }

    require_dataset(&default_data_dir()?)
}

fn require_dataset(dir: &Path) -> Result<DatasetPaths> {
    let paths = DatasetPaths::in_dir(dir);
    if paths.exists() {
        Ok(paths)
    } else {
        Err(Error::DatasetNotFound {
            path: dir.to_path_buf(),
        })
    }
}
