//! Error type shared by every stage of the generator.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generator run. None of them is recoverable.
#[derive(Debug, Error)]
pub enum Error {
    /// An input catalog does not exist
    #[error("catalog not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// An input catalog exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input catalog is not valid JSON or does not match the expected schema
    #[error("malformed catalog {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The generated file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
