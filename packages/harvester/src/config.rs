//! Configuration constants and validation functions for the harvester.

use crate::error::{HarvesterError, Result};

/// Source page for the Land Law 2013 (Luật Đất đai 45/2013/QH13).
pub const LAND_LAW_2013_URL: &str =
    "https://thuvienphapluat.vn/van-ban/Bat-dong-san/Luat-dat-dai-2013-215836.aspx";

/// Source page for the Land Law 2024 (Luật Đất đai 31/2024/QH15).
pub const LAND_LAW_2024_URL: &str =
    "https://thuvienphapluat.vn/van-ban/Bat-dong-san/Luat-Dat-dai-2024-31-2024-QH15-523642.aspx";

/// HTTP timeout in seconds.
///
/// Set to 30 seconds to accommodate large consolidated pages and slow
/// connections.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Law versions the harvester knows how to fetch.
pub const KNOWN_VERSIONS: &[&str] = &["2013", "2024"];

/// Validate a law version.
///
/// # Examples
/// ```
/// use luatdiff_harvester::config::validate_version;
///
/// assert!(validate_version("2024").is_ok());
/// assert!(validate_version("2019").is_err());
/// ```
pub fn validate_version(version: &str) -> Result<()> {
    if KNOWN_VERSIONS.contains(&version) {
        Ok(())
    } else {
        Err(HarvesterError::InvalidVersion(version.to_string()))
    }
}

/// Source URL for a law version.
///
/// # Errors
/// Returns `InvalidVersion` for versions the harvester does not know.
pub fn source_url(version: &str) -> Result<&'static str> {
    match version {
        "2013" => Ok(LAND_LAW_2013_URL),
        "2024" => Ok(LAND_LAW_2024_URL),
        other => Err(HarvesterError::InvalidVersion(other.to_string())),
    }
}

/// Stable article identifier, e.g. `L2024_#12`.
#[must_use]
pub fn article_id(version: &str, article_number: &str) -> String {
    format!("L{version}_#{article_number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_version() {
        assert!(validate_version("2013").is_ok());
        assert!(validate_version("2024").is_ok());
        assert!(validate_version("").is_err());
        assert!(validate_version("2019").is_err());
    }

    #[test]
    fn test_source_url() {
        assert_eq!(source_url("2013").unwrap(), LAND_LAW_2013_URL);
        assert_eq!(source_url("2024").unwrap(), LAND_LAW_2024_URL);
        assert!(matches!(
            source_url("1993"),
            Err(HarvesterError::InvalidVersion(_))
        ));
    }

    #[test]
    fn test_article_id() {
        assert_eq!(article_id("2024", "12"), "L2024_#12");
    }
}
