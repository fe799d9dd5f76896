//! One-to-one matching of old units to new units.
//!
//! Two interchangeable strategies derive candidate pairs from the similarity
//! matrix: an optimal bipartite assignment (Hungarian algorithm) and a
//! greedy approximation. Either way, the accepted set is re-filtered by the
//! match threshold with a hard one-to-one constraint.

use std::cmp::Ordering;

use pathfinding::kuhn_munkres::{kuhn_munkres_min, Weights};

use crate::vectorize::SimilarityMatrix;

/// Fixed-point scale for similarity scores in the integer cost matrix.
///
/// Six decimal digits comfortably exceed the three-decimal output rounding,
/// so the scaled solve cannot flip any reportable ranking.
const COST_SCALE: f64 = 1_000_000.0;

/// An accepted or candidate correspondence between one old and one new unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPair {
    /// Row index into the similarity matrix.
    pub old_index: usize,

    /// Column index into the similarity matrix.
    pub new_index: usize,

    /// Similarity of the pair, in [0, 1].
    pub score: f64,
}

/// Strategy for deriving candidate one-to-one pairs from the matrix.
pub trait AssignmentStrategy {
    /// Human-readable strategy name for run summaries.
    fn name(&self) -> &'static str;

    /// Produce a set of non-conflicting candidate pairs.
    fn solve(&self, matrix: &SimilarityMatrix) -> Vec<MatchPair>;
}

/// Globally optimal assignment via the Hungarian algorithm.
///
/// The non-square similarity matrix is padded to square with cost-1.0 dummy
/// entries (similarity 0) so every unit has a candidate assignment; pairs
/// that land in the padding region are discarded.
pub struct HungarianStrategy;

impl AssignmentStrategy for HungarianStrategy {
    fn name(&self) -> &'static str {
        "hungarian"
    }

    fn solve(&self, matrix: &SimilarityMatrix) -> Vec<MatchPair> {
        if matrix.is_degenerate() {
            return Vec::new();
        }

        let costs = PaddedCostMatrix::from_similarities(matrix);
        let (_, assignment) = kuhn_munkres_min(&costs);

        let mut pairs = Vec::new();
        for (row, &col) in assignment.iter().enumerate() {
            if row < matrix.n_old() && col < matrix.n_new() {
                pairs.push(MatchPair {
                    old_index: row,
                    new_index: col,
                    score: matrix.at(row, col),
                });
            }
        }
        pairs
    }
}

/// Greedy approximation: take the highest-scoring still-available pair
/// until none remain.
///
/// A 1/2-approximation of the maximum-weight matching in the worst case,
/// but deterministic and cheap.
pub struct GreedyStrategy;

impl AssignmentStrategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, matrix: &SimilarityMatrix) -> Vec<MatchPair> {
        if matrix.is_degenerate() {
            return Vec::new();
        }

        let mut candidates = Vec::with_capacity(matrix.n_old() * matrix.n_new());
        for old_index in 0..matrix.n_old() {
            for new_index in 0..matrix.n_new() {
                candidates.push(MatchPair {
                    old_index,
                    new_index,
                    score: matrix.at(old_index, new_index),
                });
            }
        }
        sort_by_score_desc(&mut candidates);

        let mut claimed_old = vec![false; matrix.n_old()];
        let mut claimed_new = vec![false; matrix.n_new()];
        let mut pairs = Vec::new();

        for pair in candidates {
            if claimed_old[pair.old_index] || claimed_new[pair.new_index] {
                continue;
            }
            claimed_old[pair.old_index] = true;
            claimed_new[pair.new_index] = true;
            pairs.push(pair);
        }
        pairs
    }
}

/// Pick the matching strategy for a run.
///
/// The optimal solver is linked into the binary, so it is always available;
/// the flag exists as an explicit escape hatch to the greedy approximation.
#[must_use]
pub fn select_strategy(use_optimal_solver: bool) -> Box<dyn AssignmentStrategy> {
    if use_optimal_solver {
        Box::new(HungarianStrategy)
    } else {
        Box::new(GreedyStrategy)
    }
}

/// Keep only pairs at or above the match threshold, re-enforcing the
/// one-to-one constraint greedily by descending score.
///
/// Any pair whose row or column is already claimed is dropped even if the
/// underlying solver proposed it.
#[must_use]
pub fn filter_matches(
    mut candidates: Vec<MatchPair>,
    match_threshold: f64,
    n_old: usize,
    n_new: usize,
) -> Vec<MatchPair> {
    sort_by_score_desc(&mut candidates);

    let mut claimed_old = vec![false; n_old];
    let mut claimed_new = vec![false; n_new];
    let mut accepted = Vec::new();

    for pair in candidates {
        if claimed_old[pair.old_index] || claimed_new[pair.new_index] {
            continue;
        }
        if pair.score >= match_threshold {
            claimed_old[pair.old_index] = true;
            claimed_new[pair.new_index] = true;
            accepted.push(pair);
        }
    }
    accepted
}

/// Sort by score descending; ties break by (old, new) index ascending so
/// the order is deterministic.
fn sort_by_score_desc(pairs: &mut [MatchPair]) {
    pairs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.old_index.cmp(&b.old_index))
            .then(a.new_index.cmp(&b.new_index))
    });
}

/// Square integer cost matrix, cost = (1 − similarity) scaled to `i64`,
/// padded with cost 1.0 beyond the real rows/columns.
struct PaddedCostMatrix {
    size: usize,
    costs: Vec<i64>,
}

impl PaddedCostMatrix {
    fn from_similarities(matrix: &SimilarityMatrix) -> Self {
        let size = matrix.n_old().max(matrix.n_new());
        let pad_cost = COST_SCALE as i64;
        let mut costs = vec![pad_cost; size * size];

        for i in 0..matrix.n_old() {
            for j in 0..matrix.n_new() {
                costs[i * size + j] = ((1.0 - matrix.at(i, j)) * COST_SCALE).round() as i64;
            }
        }

        Self { size, costs }
    }
}

impl Weights<i64> for PaddedCostMatrix {
    fn rows(&self) -> usize {
        self.size
    }

    fn columns(&self) -> usize {
        self.size
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.costs[row * self.size + col]
    }

    fn neg(&self) -> Self {
        Self {
            size: self.size,
            costs: self.costs.iter().map(|&c| -c).collect(),
        }
    }
}
