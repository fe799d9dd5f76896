//! Comparison configuration.
//!
//! All thresholds live in one immutable struct that is passed by reference
//! into every stage; no stage carries module-level mutable state.

use crate::error::{ComparerError, Result};

/// Letter class for structural list markers in Vietnamese legal text.
///
/// `À-ỹ` covers the precomposed extended-Latin range used by the Vietnamese
/// alphabet, so markers like `đ)` and `ê)` are recognised alongside `a)`.
pub const VIETNAMESE_MARKER_LETTERS: &str = "A-Za-zÀ-ỹ";

/// Configuration for one comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    /// Minimum similarity for an accepted one-to-one match.
    pub match_threshold: f64,

    /// Per-candidate similarity floor when probing for splits.
    pub split_unit_threshold: f64,

    /// Minimum summed similarity over split candidates.
    pub split_sum_threshold: f64,

    /// Per-candidate similarity floor when probing for merges.
    pub merge_unit_threshold: f64,

    /// Minimum summed similarity over merge candidates.
    pub merge_sum_threshold: f64,

    /// Prefer the optimal assignment solver over the greedy approximation.
    pub use_optimal_solver: bool,

    /// Inclusive n-gram range for vectorization, e.g. (1, 2).
    pub ngram_range: (usize, usize),

    /// Regex character class matched as a single-letter structural marker.
    pub marker_letters: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.60,
            split_unit_threshold: 0.35,
            split_sum_threshold: 0.75,
            merge_unit_threshold: 0.35,
            merge_sum_threshold: 0.75,
            use_optimal_solver: true,
            ngram_range: (1, 2),
            marker_letters: VIETNAMESE_MARKER_LETTERS.to_string(),
        }
    }
}

impl CompareConfig {
    /// Set the match threshold.
    #[must_use]
    pub fn with_match_threshold(mut self, value: f64) -> Self {
        self.match_threshold = value;
        self
    }

    /// Disable the optimal solver, forcing greedy matching.
    #[must_use]
    pub fn with_greedy_matching(mut self) -> Self {
        self.use_optimal_solver = false;
        self
    }

    /// Validate all thresholds and ranges.
    ///
    /// Per-pair thresholds must lie in [0, 1] (cosine similarity range).
    /// The sum thresholds bound a sum of similarities over several
    /// candidates and may exceed 1.0; they only have to be finite and at
    /// least the corresponding per-unit threshold.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("match_threshold", self.match_threshold),
            ("split_unit_threshold", self.split_unit_threshold),
            ("merge_unit_threshold", self.merge_unit_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(ComparerError::InvalidThreshold { name, value });
            }
        }

        for (name, value, floor) in [
            (
                "split_sum_threshold",
                self.split_sum_threshold,
                self.split_unit_threshold,
            ),
            (
                "merge_sum_threshold",
                self.merge_sum_threshold,
                self.merge_unit_threshold,
            ),
        ] {
            if !value.is_finite() || value < floor {
                return Err(ComparerError::InvalidThreshold { name, value });
            }
        }

        let (min, max) = self.ngram_range;
        if min == 0 || min > max {
            return Err(ComparerError::InvalidNgramRange(min, max));
        }

        Ok(())
    }
}
