//! JSON file persistence for the station collection.
//!
//! The file holds a pretty-printed JSON array of station objects. Every save
//! rewrites it in full; a torn write is tolerated on the next startup by
//! falling back to the seed set.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::Station;

use super::error::{LoadError, StoreError};
use super::seed::seed_stations;

/// The backing data file.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode every station in the file.
    ///
    /// Numeric fields are coerced the same way request bodies are, so a
    /// hand-edited file with `"1.85"` still loads. Any bad entry fails the
    /// whole load.
    pub fn load(&self) -> Result<Vec<Station>, LoadError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LoadError::Missing(self.path.clone()));
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let entries: Vec<Value> =
            serde_json::from_str(&contents).map_err(|source| LoadError::Json {
                path: self.path.clone(),
                source,
            })?;

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Station::from_json(entry).map_err(|source| LoadError::Record {
                    path: self.path.clone(),
                    index,
                    source,
                })
            })
            .collect()
    }

    /// Load the file, substituting the seed set if it is absent or unusable.
    pub fn load_or_seed(&self) -> Vec<Station> {
        match self.load() {
            Ok(stations) => {
                info!(path = %self.path.display(), count = stations.len(), "loaded stations");
                stations
            }
            Err(LoadError::Missing(_)) => {
                info!(path = %self.path.display(), "no data file, starting from seed stations");
                seed_stations()
            }
            Err(e) => {
                warn!(error = %e, "data file unusable, starting from seed stations");
                seed_stations()
            }
        }
    }

    /// Overwrite the file with `stations`.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, stations: &[Station]) -> Result<(), StoreError> {
        let persist_err = |message: String| StoreError::Persist {
            path: self.path.clone(),
            message,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| persist_err(format!("failed to create directory: {e}")))?;
        }

        let json = serde_json::to_string_pretty(stations)
            .map_err(|e| persist_err(format!("failed to serialize: {e}")))?;

        std::fs::write(&self.path, json).map_err(|e| persist_err(format!("failed to write: {e}")))
    }
}
