//! Error types for the shared crate.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for article tree loading and saving.
#[derive(Debug, Error)]
pub enum SharedError {
    /// IO error with the path that caused it.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Article JSON could not be parsed.
    #[error("Malformed article JSON in {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Article JSON could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for shared operations.
pub type Result<T> = std::result::Result<T, SharedError>;
