//! Error types for flow map loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading flow map files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Point type string is not one of uint8, uint16, float32, float64.
    #[error("unrecognized point type '{0}' (expected uint8, uint16, float32 or float64)")]
    UnrecognizedPointType(String),

    /// A flow map directory could not be listed.
    #[error("failed to open directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A raw point file could not be read.
    #[error("failed to read points {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No timestep could be recovered from a file name.
    #[error("no timestep in file name '{0}'")]
    MissingTimestep(String),

    /// The timestep digits do not fit in an i64.
    #[error("timestep in file name '{0}' is out of range")]
    TimestepOutOfRange(String),

    /// None of the given directories held a raw file.
    #[error("no .raw flow map files found in {0:?}")]
    EmptySequence(Vec<PathBuf>),

    /// Summary output could not be written.
    #[error("failed to write summary {path}: {source}")]
    Summary {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for flow map loading.
pub type Result<T> = std::result::Result<T, LoadError>;
