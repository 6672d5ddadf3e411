//! Headings subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_headings_lists_levels_lines_and_anchors() {
    cargo_bin_cmd!("mdtoc")
        .arg("headings")
        .write_stdin("# Top\n\n## Nested\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1"))
        .stdout(predicate::str::contains("# Top  (#top)"))
        .stdout(predicate::str::contains("## "))
        .stdout(predicate::str::contains("Nested  (#nested)"));
}

#[test]
fn test_headings_respects_custom_anchor_hints() {
    cargo_bin_cmd!("mdtoc")
        .arg("headings")
        .write_stdin("# Install guide {#install}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Install guide  (#install)"));
}

#[test]
fn test_headings_skips_fenced_code() {
    cargo_bin_cmd!("mdtoc")
        .arg("headings")
        .write_stdin("```\n# nope\n```\n# yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("yes"))
        .stdout(predicate::str::contains("nope").not());
}

#[test]
fn test_headings_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "## Only one\n").unwrap();

    cargo_bin_cmd!("mdtoc")
        .args(["headings", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Only one  (#only-one)"));
}
