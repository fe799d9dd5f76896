//! Changelog persistence and console summary.

use std::path::Path;

use console::style;
use luatdiff_shared::write_atomic;

use crate::comparer::ComparisonReport;
use crate::error::Result;
use crate::mapping::ChangeEntry;

/// Save the changelog entries as pretty-printed JSON.
///
/// Writes atomically; a crash mid-write never leaves a truncated file.
pub fn save_report(path: &Path, entries: &[ChangeEntry]) -> Result<()> {
    let content = serde_json::to_string_pretty(entries)?;
    write_atomic(path, &content)?;
    Ok(())
}

/// Load a previously saved changelog.
///
/// # Errors
/// Fails on unreadable or malformed JSON.
pub fn load_report(path: &Path) -> Result<Vec<ChangeEntry>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Print the run summary in the house console style.
pub fn print_summary(report: &ComparisonReport) {
    let summary = &report.summary;
    println!(
        "  Units: {} old, {} new ({} matched, solver: {})",
        summary.old_units,
        summary.new_units,
        summary.matched,
        style(&summary.solver).cyan()
    );
    println!("  Modified: {}", style(summary.modified).yellow());
    println!("  Deleted: {}", style(summary.deleted).red());
    println!("  Added: {}", style(summary.added).green());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{ChangeType, UnitKey};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_entry() -> ChangeEntry {
        ChangeEntry {
            unit_2013: Some(UnitKey {
                article_id: "L2013_#4".to_string(),
                article_number: "4".to_string(),
                clause_id: Some("1".to_string()),
                point_id: None,
            }),
            unit_2024: None,
            similarity: 0.0,
            change_type: ChangeType::Deleted,
            before_change: "Nội dung cũ.".to_string(),
            after_change: String::new(),
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        let entries = vec![sample_entry()];

        save_report(&path, &entries).unwrap();
        let loaded = load_report(&path).unwrap();
        assert_eq!(entries, loaded);
    }

    #[test]
    fn test_saved_json_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        save_report(&path, &[sample_entry()]).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["change_type"], "deleted");
        assert_eq!(value[0]["unit_2024"], serde_json::Value::Null);
        // Null identifier fields are written out, not omitted.
        assert_eq!(value[0]["unit_2013"]["point_id"], serde_json::Value::Null);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(load_report(&dir.path().join("nope.json")).is_err());
    }
}
