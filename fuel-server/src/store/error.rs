//! Store and persistence error types.

use std::path::PathBuf;

use crate::domain::{DomainError, StationId};

/// Errors from station store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A station with this id already exists
    #[error("station {0} already exists")]
    Duplicate(StationId),

    /// Writing the data file failed
    #[error("failed to persist stations to {}: {message}", path.display())]
    Persist { path: PathBuf, message: String },
}

/// Why the data file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist (a fresh install)
    #[error("data file {} not found", .0.display())]
    Missing(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array
    #[error("{} is not a valid JSON array: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An entry of the array is not a valid station
    #[error("record {index} in {} is invalid: {source}", path.display())]
    Record {
        path: PathBuf,
        index: usize,
        #[source]
        source: DomainError,
    },
}
