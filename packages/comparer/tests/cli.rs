//! CLI smoke tests for the comparer binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Helper to get the comparer binary command
fn comparer_cmd() -> Command {
    Command::cargo_bin("luatdiff-comparer").unwrap()
}

fn write_articles(path: &std::path::Path, json: &str) {
    std::fs::write(path, json).unwrap();
}

const OLD_ARTICLES: &str = r#"[
    {
        "article_id": "L2013_#4",
        "article_number": "4",
        "full_text": "1. Đất đai thuộc sở hữu toàn dân."
    }
]"#;

const NEW_ARTICLES: &str = r#"[
    {
        "article_id": "L2024_#4",
        "article_number": "4",
        "full_text": "1. Đất đai thuộc sở hữu toàn dân do Nhà nước đại diện chủ sở hữu."
    }
]"#;

#[test]
fn test_help_lists_subcommands() {
    comparer_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("glossary"));
}

#[test]
fn test_compare_writes_mapping() {
    let dir = tempdir().unwrap();
    let old_path = dir.path().join("articles_2013.json");
    let new_path = dir.path().join("articles_2024.json");
    let out_path = dir.path().join("mapping.json");
    write_articles(&old_path, OLD_ARTICLES);
    write_articles(&new_path, NEW_ARTICLES);

    comparer_cmd()
        .arg("compare")
        .arg(&old_path)
        .arg(&new_path)
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    let raw = std::fs::read_to_string(&out_path).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries[0]["change_type"], "modified");
}

#[test]
fn test_compare_missing_input_fails() {
    let dir = tempdir().unwrap();
    comparer_cmd()
        .arg("compare")
        .arg(dir.path().join("nope.json"))
        .arg(dir.path().join("nope2.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_compare_malformed_input_fails() {
    let dir = tempdir().unwrap();
    let old_path = dir.path().join("bad.json");
    let new_path = dir.path().join("articles.json");
    write_articles(&old_path, "{not json");
    write_articles(&new_path, NEW_ARTICLES);

    comparer_cmd()
        .arg("compare")
        .arg(&old_path)
        .arg(&new_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_compare_invalid_threshold_fails() {
    let dir = tempdir().unwrap();
    let old_path = dir.path().join("old.json");
    let new_path = dir.path().join("new.json");
    write_articles(&old_path, OLD_ARTICLES);
    write_articles(&new_path, NEW_ARTICLES);

    comparer_cmd()
        .arg("compare")
        .arg(&old_path)
        .arg(&new_path)
        .arg("--match-threshold")
        .arg("1.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("match_threshold"));
}

#[test]
fn test_glossary_extracts_terms() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("articles.json");
    let out_path = dir.path().join("glossary.json");
    write_articles(
        &input,
        r#"[
            {
                "article_id": "L2024_#3",
                "article_number": "3",
                "full_text": "Thửa đất là phần diện tích đất được giới hạn bởi ranh giới."
            }
        ]"#,
    );

    comparer_cmd()
        .arg("glossary")
        .arg(&input)
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    let raw = std::fs::read_to_string(&out_path).unwrap();
    let terms: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(terms[0]["term"], "Thửa đất");
}
