//! Error types for the harvester.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Unsupported law version.
    #[error("Unknown law version: '{0}'. Expected 2013 or 2024")]
    InvalidVersion(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// All retry attempts exhausted.
    #[error("Download failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// The article content block was not found in the page.
    #[error("No article content found in the page for version {version}")]
    MissingContent { version: String },

    /// Shared model or IO error.
    #[error(transparent)]
    Shared(#[from] luatdiff_shared::SharedError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HarvesterError::InvalidVersion("2019".to_string());
        assert!(err.to_string().contains("2019"));
        assert!(err.to_string().contains("2013 or 2024"));
    }

    #[test]
    fn test_retries_exhausted_display() {
        let err = HarvesterError::RetriesExhausted {
            attempts: 3,
            message: "Server error: 503".to_string(),
        };
        assert!(err.to_string().contains("3 attempts"));
        assert!(err.to_string().contains("503"));
    }
}
