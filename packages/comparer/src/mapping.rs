//! Changelog synthesis.
//!
//! Takes the accepted one-to-one matches and the split/merge detections and
//! produces the final ordered change list. Unchanged units are never
//! emitted; their absence is the signal.

use serde::{Deserialize, Serialize};

use crate::matching::MatchPair;
use crate::splitmerge::CandidateGroups;
use crate::units::TextUnit;

/// Identifier tuple of a unit as it appears in the change output.
///
/// Absent clause/point identifiers are serialized as explicit nulls so
/// every entry carries the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitKey {
    pub article_id: String,
    pub article_number: String,
    pub clause_id: Option<String>,
    pub point_id: Option<String>,
}

impl UnitKey {
    fn from_unit(unit: &TextUnit) -> Self {
        Self {
            article_id: unit.article_id.clone(),
            article_number: unit.article_number.clone(),
            clause_id: unit.clause_id.clone(),
            point_id: unit.point_id.clone(),
        }
    }
}

/// Kind of change recorded for a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Modified,
    Deleted,
    Added,
}

/// One record of the final changelog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Old-version unit; null for additions.
    pub unit_2013: Option<UnitKey>,

    /// New-version unit; null for deletions.
    pub unit_2024: Option<UnitKey>,

    /// Match similarity rounded to three decimals; 0.0 for added/deleted.
    pub similarity: f64,

    pub change_type: ChangeType,

    /// Normalized old text; empty for additions.
    pub before_change: String,

    /// Normalized new text; empty for deletions.
    pub after_change: String,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn modified_entry(
    old: &TextUnit,
    new: &TextUnit,
    score: f64,
    before: &str,
    after: &str,
) -> ChangeEntry {
    ChangeEntry {
        unit_2013: Some(UnitKey::from_unit(old)),
        unit_2024: Some(UnitKey::from_unit(new)),
        similarity: round3(score),
        change_type: ChangeType::Modified,
        before_change: before.to_string(),
        after_change: after.to_string(),
    }
}

fn deleted_entry(old: &TextUnit, before: &str) -> ChangeEntry {
    ChangeEntry {
        unit_2013: Some(UnitKey::from_unit(old)),
        unit_2024: None,
        similarity: 0.0,
        change_type: ChangeType::Deleted,
        before_change: before.to_string(),
        after_change: String::new(),
    }
}

fn added_entry(new: &TextUnit, after: &str) -> ChangeEntry {
    ChangeEntry {
        unit_2013: None,
        unit_2024: Some(UnitKey::from_unit(new)),
        similarity: 0.0,
        change_type: ChangeType::Added,
        before_change: String::new(),
        after_change: after.to_string(),
    }
}

/// Merge matches, splits, and merges into the final changelog.
///
/// Precedence, applied in emission order:
/// 1. Accepted matches become `modified` entries (equal normalized texts
///    stay silent). A match whose old unit is a split source, or whose new
///    unit is a merge target, yields to that detection and emits nothing
///    here.
/// 2. Every split source becomes one `deleted` entry; its candidate new
///    targets are consumed silently and never fall through to `added`.
/// 3. Every merge target becomes one `added` entry; its old legs are left
///    for step 4.
/// 4. Old units still unclassified become `deleted` entries.
/// 5. New units still unclassified and not excluded by a split become
///    `added` entries.
#[must_use]
pub fn synthesize(
    old_units: &[TextUnit],
    new_units: &[TextUnit],
    normalized_old: &[String],
    normalized_new: &[String],
    matches: &[MatchPair],
    splits: &CandidateGroups,
    merges: &CandidateGroups,
) -> Vec<ChangeEntry> {
    let mut entries = Vec::new();
    let mut classified_old = vec![false; old_units.len()];
    let mut classified_new = vec![false; new_units.len()];
    // Split targets are excluded from the residual `added` pass but may
    // still be claimed by an independent match.
    let mut split_excluded_new = vec![false; new_units.len()];

    // 1. Matches, in old-index order for stable output.
    let mut ordered_matches: Vec<&MatchPair> = matches.iter().collect();
    ordered_matches.sort_by_key(|m| (m.old_index, m.new_index));

    for pair in ordered_matches {
        if splits.contains_key(&pair.old_index) || merges.contains_key(&pair.new_index) {
            continue;
        }
        classified_old[pair.old_index] = true;
        classified_new[pair.new_index] = true;

        let before = &normalized_old[pair.old_index];
        let after = &normalized_new[pair.new_index];
        if before != after {
            entries.push(modified_entry(
                &old_units[pair.old_index],
                &new_units[pair.new_index],
                pair.score,
                before,
                after,
            ));
        }
    }

    // 2. Split sources.
    for (&old_index, targets) in splits {
        if !classified_old[old_index] {
            classified_old[old_index] = true;
            entries.push(deleted_entry(
                &old_units[old_index],
                &normalized_old[old_index],
            ));
        }
        for &(new_index, _) in targets {
            split_excluded_new[new_index] = true;
        }
    }

    // 3. Merge targets.
    for &new_index in merges.keys() {
        if !classified_new[new_index] {
            classified_new[new_index] = true;
            entries.push(added_entry(
                &new_units[new_index],
                &normalized_new[new_index],
            ));
        }
    }

    // 4. Residual deletions, merge legs included.
    for (old_index, unit) in old_units.iter().enumerate() {
        if !classified_old[old_index] {
            entries.push(deleted_entry(unit, &normalized_old[old_index]));
        }
    }

    // 5. Residual additions.
    for (new_index, unit) in new_units.iter().enumerate() {
        if !classified_new[new_index] && !split_excluded_new[new_index] {
            entries.push(added_entry(unit, &normalized_new[new_index]));
        }
    }

    entries
}
