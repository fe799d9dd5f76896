//! The comparison pipeline, end to end.
//!
//! Flattens both article trees, normalizes their texts, scores every
//! old/new pair, matches, detects splits and merges, and synthesizes the
//! changelog. One batch computation; every stage hands a fresh artifact to
//! the next.

use luatdiff_shared::Article;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::CompareConfig;
use crate::error::Result;
use crate::mapping::{synthesize, ChangeEntry, ChangeType};
use crate::matching::{filter_matches, select_strategy};
use crate::normalize::Normalizer;
use crate::splitmerge::{detect_merges, detect_splits};
use crate::units::flatten_units;
use crate::vectorize::similarity_matrix;

/// Counts and provenance of one comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub old_units: usize,
    pub new_units: usize,
    pub matched: usize,
    pub modified: usize,
    pub deleted: usize,
    pub added: usize,

    /// Matching strategy that produced the pairs ("hungarian" or "greedy").
    pub solver: String,
}

/// Changelog plus run summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub entries: Vec<ChangeEntry>,
    pub summary: RunSummary,
}

/// Compare two versions of a document and produce the changelog.
///
/// # Arguments
/// * `old_articles` - the earlier version's article tree
/// * `new_articles` - the later version's article tree
/// * `config` - thresholds and strategy selection, validated up front
///
/// # Errors
/// Returns an error if the configuration is invalid or the marker letter
/// class does not compile. Empty inputs are not errors: comparing two empty
/// documents yields an empty changelog.
pub fn compare_documents(
    old_articles: &[Article],
    new_articles: &[Article],
    config: &CompareConfig,
) -> Result<ComparisonReport> {
    config.validate()?;
    let normalizer = Normalizer::with_letter_class(&config.marker_letters)?;

    let old_units = flatten_units(old_articles);
    let new_units = flatten_units(new_articles);
    info!(
        old_units = old_units.len(),
        new_units = new_units.len(),
        "flattened article trees"
    );

    let normalized_old: Vec<String> = old_units
        .iter()
        .map(|u| normalizer.for_compare(&u.text))
        .collect();
    let normalized_new: Vec<String> = new_units
        .iter()
        .map(|u| normalizer.for_compare(&u.text))
        .collect();

    let matrix = similarity_matrix(&normalized_old, &normalized_new, config.ngram_range);

    let strategy = select_strategy(config.use_optimal_solver);
    let candidates = strategy.solve(&matrix);
    let matches = filter_matches(
        candidates,
        config.match_threshold,
        old_units.len(),
        new_units.len(),
    );
    debug!(matched = matches.len(), solver = strategy.name(), "matching done");

    let splits = detect_splits(&matrix, config.split_unit_threshold, config.split_sum_threshold);
    let merges = detect_merges(&matrix, config.merge_unit_threshold, config.merge_sum_threshold);
    debug!(splits = splits.len(), merges = merges.len(), "split/merge detection done");

    let entries = synthesize(
        &old_units,
        &new_units,
        &normalized_old,
        &normalized_new,
        &matches,
        &splits,
        &merges,
    );

    let count = |kind: ChangeType| entries.iter().filter(|e| e.change_type == kind).count();
    let summary = RunSummary {
        old_units: old_units.len(),
        new_units: new_units.len(),
        matched: matches.len(),
        modified: count(ChangeType::Modified),
        deleted: count(ChangeType::Deleted),
        added: count(ChangeType::Added),
        solver: strategy.name().to_string(),
    };
    info!(
        modified = summary.modified,
        deleted = summary.deleted,
        added = summary.added,
        "comparison complete"
    );

    Ok(ComparisonReport { entries, summary })
}
