//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("mdtoc")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdtoc reads a Markdown document"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("mdtoc")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("mdtoc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("mdtoc")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_generate_help() {
    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate a table of contents"));
}

#[test]
fn test_headings_help() {
    cargo_bin_cmd!("mdtoc")
        .args(["headings", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list every heading"));
}
