//! Text normalization ahead of similarity comparison.
//!
//! Legal fragments carry structural markers ("1. ", "3) ", "đ) ") that say
//! where a unit sits, not what it says; two otherwise identical clauses must
//! not be penalised for being renumbered. The normalizer strips one leading
//! marker and collapses whitespace noise.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::VIETNAMESE_MARKER_LETTERS;
use crate::error::{ComparerError, Result};

/// Runs of whitespace (spaces, tabs, line breaks).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalizer with a configurable marker letter class.
///
/// The letter class decides which single letters count as a structural
/// marker ("a)", "đ."), so the normalizer is reusable across scripts.
#[derive(Debug, Clone)]
pub struct Normalizer {
    leading_marker: Regex,
}

impl Normalizer {
    /// Create a normalizer for the given regex character class.
    ///
    /// # Arguments
    /// * `letter_class` - class body without brackets, e.g. `"A-Za-zÀ-ỹ"`
    pub fn with_letter_class(letter_class: &str) -> Result<Self> {
        let pattern = format!(
            r"(?i)^\s*(?:\d+\.\s*|\d+\)\s*|[{letter_class}]\)\s*|[{letter_class}]\.\s*)"
        );
        let leading_marker =
            Regex::new(&pattern).map_err(|source| ComparerError::InvalidMarkerClass {
                class: letter_class.to_string(),
                source: Box::new(source),
            })?;
        Ok(Self { leading_marker })
    }

    /// Normalize text for similarity comparison.
    ///
    /// Strips one leading structural marker, collapses all whitespace runs
    /// (including line breaks and tabs) to single spaces, and trims.
    /// Deterministic and pure; empty input yields an empty string.
    #[must_use]
    pub fn for_compare(&self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return String::new();
        }
        let stripped = self.leading_marker.replace(trimmed, "");
        WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
    }

    /// Normalize text for human-readable output.
    ///
    /// Currently the identical transformation as [`Self::for_compare`]; the
    /// two names exist so the comparison and display call sites stay
    /// independent, but they must remain behaviourally equal.
    #[must_use]
    pub fn for_output(&self, text: &str) -> String {
        self.for_compare(text)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        #[allow(clippy::expect_used)] // Static letter class that is guaranteed to be valid
        Self::with_letter_class(VIETNAMESE_MARKER_LETTERS).expect("valid default letter class")
    }
}

/// Normalize with the default Vietnamese marker class.
#[must_use]
pub fn normalize_for_compare(text: &str) -> String {
    static DEFAULT: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);
    DEFAULT.for_compare(text)
}

/// Display-variant of [`normalize_for_compare`]; behaviourally equal.
#[must_use]
pub fn normalize_for_output(text: &str) -> String {
    static DEFAULT: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);
    DEFAULT.for_output(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_numeric_ordinal() {
        assert_eq!(
            normalize_for_compare("12. Nội dung khoản."),
            "Nội dung khoản."
        );
    }

    #[test]
    fn test_strips_numeric_bracket() {
        assert_eq!(normalize_for_compare("3) Nội dung."), "Nội dung.");
    }

    #[test]
    fn test_strips_letter_markers() {
        assert_eq!(normalize_for_compare("a) Điểm a."), "Điểm a.");
        assert_eq!(normalize_for_compare("b. Điểm b."), "Điểm b.");
    }

    #[test]
    fn test_strips_vietnamese_letter_marker() {
        assert_eq!(normalize_for_compare("đ) Điểm đ."), "Điểm đ.");
        assert_eq!(normalize_for_compare("Đ) Điểm đ."), "Điểm đ.");
    }

    #[test]
    fn test_marker_only_at_start() {
        // A marker-looking sequence mid-text must survive.
        assert_eq!(
            normalize_for_compare("Theo quy định tại điểm a) của khoản này."),
            "Theo quy định tại điểm a) của khoản này."
        );
    }

    #[test]
    fn test_strips_single_marker_only() {
        // Only the first marker goes; "1. a) text" keeps "a) text".
        assert_eq!(normalize_for_compare("1. a) Nội dung."), "a) Nội dung.");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            normalize_for_compare("1. Đất đai\r\n\tthuộc   sở hữu\ntoàn dân."),
            "Đất đai thuộc sở hữu toàn dân."
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_for_compare(""), "");
        assert_eq!(normalize_for_compare("   \n\t "), "");
    }

    #[test]
    fn test_word_start_not_stripped() {
        // "Đất" begins with a marker-class letter but no punctuation follows.
        assert_eq!(
            normalize_for_compare("Đất đai thuộc sở hữu toàn dân."),
            "Đất đai thuộc sở hữu toàn dân."
        );
    }

    #[test]
    fn test_compare_and_output_agree() {
        let samples = ["1. Đất đai.", "đ) Điểm.", "  xen\nkẽ  ", ""];
        for s in samples {
            assert_eq!(normalize_for_compare(s), normalize_for_output(s));
        }
    }

    #[test]
    fn test_custom_letter_class() {
        // ASCII-only class: "đ)" is not recognised as a marker.
        let ascii = Normalizer::with_letter_class("A-Za-z").unwrap();
        assert_eq!(ascii.for_compare("a) Điểm."), "Điểm.");
        assert_eq!(ascii.for_compare("đ) Điểm."), "đ) Điểm.");
    }

    #[test]
    fn test_invalid_letter_class_rejected() {
        let err = Normalizer::with_letter_class("z-a").unwrap_err();
        assert!(matches!(err, ComparerError::InvalidMarkerClass { .. }));
    }
}
