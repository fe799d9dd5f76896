//! CLI smoke tests for the harvester binary (no network).

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get the harvester binary command
fn harvester_cmd() -> Command {
    Command::cargo_bin("luatdiff-harvester").unwrap()
}

#[test]
fn test_help_lists_crawl() {
    harvester_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("crawl"));
}

#[test]
fn test_unknown_version_fails_fast() {
    harvester_cmd()
        .arg("crawl")
        .arg("1993")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown law version"));
}

#[test]
fn test_missing_version_is_usage_error() {
    harvester_cmd()
        .arg("crawl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
