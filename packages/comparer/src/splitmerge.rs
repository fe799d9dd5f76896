//! Split and merge detection.
//!
//! A split is one old unit whose content reappears distributed across
//! several new units; a merge is the symmetric case. Both are detected on
//! the raw similarity matrix, independent of the one-to-one matcher;
//! precedence between the two is resolved by the synthesizer.

use std::collections::BTreeMap;

use crate::vectorize::SimilarityMatrix;

/// Candidate counterparts per unit index, ordered by descending similarity.
///
/// Keyed by old index for splits and by new index for merges; the ordered
/// map keeps downstream emission deterministic.
pub type CandidateGroups = BTreeMap<usize, Vec<(usize, f64)>>;

/// Detect old units whose similarity mass is spread over several new units.
///
/// An old unit `i` is a split source when more than one new unit scores at
/// least `unit_threshold` against it and those scores sum to at least
/// `sum_threshold`.
#[must_use]
pub fn detect_splits(
    matrix: &SimilarityMatrix,
    unit_threshold: f64,
    sum_threshold: f64,
) -> CandidateGroups {
    let mut splits = CandidateGroups::new();

    for i in 0..matrix.n_old() {
        let candidates = collect_candidates(
            (0..matrix.n_new()).map(|j| (j, matrix.at(i, j))),
            unit_threshold,
        );
        if qualifies(&candidates, sum_threshold) {
            splits.insert(i, candidates);
        }
    }

    splits
}

/// Detect new units that fuse the content of several old units.
///
/// Symmetric to [`detect_splits`] with the old/new roles swapped.
#[must_use]
pub fn detect_merges(
    matrix: &SimilarityMatrix,
    unit_threshold: f64,
    sum_threshold: f64,
) -> CandidateGroups {
    let mut merges = CandidateGroups::new();

    for j in 0..matrix.n_new() {
        let candidates = collect_candidates(
            (0..matrix.n_old()).map(|i| (i, matrix.at(i, j))),
            unit_threshold,
        );
        if qualifies(&candidates, sum_threshold) {
            merges.insert(j, candidates);
        }
    }

    merges
}

/// Keep counterparts at or above the per-unit threshold, sorted by
/// descending similarity (ties by index, for determinism).
fn collect_candidates(
    scores: impl Iterator<Item = (usize, f64)>,
    unit_threshold: f64,
) -> Vec<(usize, f64)> {
    let mut candidates: Vec<(usize, f64)> =
        scores.filter(|&(_, s)| s >= unit_threshold).collect();
    candidates.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    candidates
}

/// More than one candidate and enough combined similarity mass.
fn qualifies(candidates: &[(usize, f64)], sum_threshold: f64) -> bool {
    candidates.len() > 1 && candidates.iter().map(|&(_, s)| s).sum::<f64>() >= sum_threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detects_simple_split() {
        // Old unit 0 spreads over new units 0 and 1.
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![0.5, 0.45, 0.1],
            vec![0.0, 0.0, 0.9],
        ]);
        let splits = detect_splits(&matrix, 0.35, 0.75);

        assert_eq!(splits.len(), 1);
        let candidates = &splits[&0];
        assert_eq!(candidates.len(), 2);
        // Ordered by descending similarity.
        assert_eq!(candidates[0].0, 0);
        assert_eq!(candidates[1].0, 1);
    }

    #[test]
    fn test_single_strong_candidate_is_not_a_split() {
        // One candidate above threshold, even at similarity 1.0.
        let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.1]]);
        assert!(detect_splits(&matrix, 0.35, 0.75).is_empty());
    }

    #[test]
    fn test_sum_threshold_enforced() {
        // Two candidates at 0.36 each: sum 0.72 < 0.75.
        let matrix = SimilarityMatrix::from_rows(vec![vec![0.36, 0.36]]);
        assert!(detect_splits(&matrix, 0.35, 0.75).is_empty());

        // Raise one to 0.40: sum 0.76 qualifies.
        let matrix = SimilarityMatrix::from_rows(vec![vec![0.40, 0.36]]);
        assert_eq!(detect_splits(&matrix, 0.35, 0.75).len(), 1);
    }

    #[test]
    fn test_unit_threshold_excludes_weak_candidates() {
        // 0.34 stays below the per-unit floor and must not count toward
        // the sum even though the total would qualify.
        let matrix = SimilarityMatrix::from_rows(vec![vec![0.50, 0.34, 0.34]]);
        assert!(detect_splits(&matrix, 0.35, 0.75).is_empty());
    }

    #[test]
    fn test_detects_simple_merge() {
        // New unit 1 fuses old units 0 and 1.
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![0.1, 0.5],
            vec![0.0, 0.45],
        ]);
        let merges = detect_merges(&matrix, 0.35, 0.75);

        assert_eq!(merges.len(), 1);
        let candidates = &merges[&1];
        assert_eq!(candidates[0], (0, 0.5));
        assert_eq!(candidates[1], (1, 0.45));
    }

    #[test]
    fn test_split_and_merge_are_independent() {
        // A dense block qualifies in both directions at once.
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![0.5, 0.5],
            vec![0.5, 0.5],
        ]);
        assert_eq!(detect_splits(&matrix, 0.35, 0.75).len(), 2);
        assert_eq!(detect_merges(&matrix, 0.35, 0.75).len(), 2);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SimilarityMatrix::zeros(0, 0);
        assert!(detect_splits(&matrix, 0.35, 0.75).is_empty());
        assert!(detect_merges(&matrix, 0.35, 0.75).is_empty());
    }
}
