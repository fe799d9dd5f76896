//! Error types for the comparer.

use thiserror::Error;

/// Main error type for the comparer library.
#[derive(Debug, Error)]
pub enum ComparerError {
    /// Article file could not be loaded or written.
    #[error(transparent)]
    Shared(#[from] luatdiff_shared::SharedError),

    /// A configured threshold is outside its allowed range.
    #[error("Invalid threshold {name}: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// The configured n-gram range is empty or reversed.
    #[error("Invalid n-gram range ({0}, {1}): expected 1 <= min <= max")]
    InvalidNgramRange(usize, usize),

    /// The marker letter class does not compile into a regex.
    #[error("Invalid marker letter class '{class}': {source}")]
    InvalidMarkerClass {
        class: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for comparer operations.
pub type Result<T> = std::result::Result<T, ComparerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_threshold_display() {
        let err = ComparerError::InvalidThreshold {
            name: "match_threshold",
            value: 1.5,
        };
        assert!(err.to_string().contains("match_threshold"));
        assert!(err.to_string().contains("1.5"));
    }
}
