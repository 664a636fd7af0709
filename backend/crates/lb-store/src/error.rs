use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store initialization failed at {path}: {message} {location}")]
    Initialization {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to persist store to {path}: {source} {location}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize store: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Creates Initialization error at caller location.
    #[track_caller]
    pub fn initialization(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Initialization {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Persistence error at caller location.
    #[track_caller]
    pub fn persistence(path: PathBuf, source: std::io::Error) -> Self {
        Self::Persistence {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the failure happened while writing state (as opposed to loading it)
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::Persistence { .. } | Self::Serialization { .. })
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
