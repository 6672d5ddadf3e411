//! Generate subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_generate_stdin_to_stdout() {
    cargo_bin_cmd!("mdtoc")
        .arg("generate")
        .write_stdin("# Heading\n\nParagraph.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<!-- TOC start"))
        .stdout(predicate::str::contains("- [Heading](#heading)"))
        .stdout(predicate::str::contains("Paragraph."));
}

#[test]
fn test_generate_file_prints_to_stdout_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "# Heading\n").unwrap();

    cargo_bin_cmd!("mdtoc")
        .args(["generate", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [Heading](#heading)"));

    // The input file must stay untouched without --write.
    let content = fs::read_to_string(&test_file).unwrap();
    assert_eq!(content, "# Heading\n");
}

#[test]
fn test_generate_write_updates_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "# Heading\n\nBody.\n").unwrap();

    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--write", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let content = fs::read_to_string(&test_file).unwrap();
    assert!(content.contains("<!-- TOC start"));
    assert!(content.contains("- [Heading](#heading)"));
    assert!(content.contains("Body."));
}

#[test]
fn test_generate_write_requires_a_file() {
    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--write"])
        .write_stdin("# Heading\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--write requires a file"));
}

#[test]
fn test_generate_output_writes_elsewhere() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("doc.md");
    let output = temp_dir.path().join("out.md");
    fs::write(&input, "# Heading\n").unwrap();

    cargo_bin_cmd!("mdtoc")
        .args([
            "generate",
            "--output",
            output.to_str().unwrap(),
            input.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("- [Heading](#heading)"));
    assert_eq!(fs::read_to_string(&input).unwrap(), "# Heading\n");
}

#[test]
fn test_generate_write_conflicts_with_output() {
    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--write", "--output", "x.md", "doc.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_generate_check_up_to_date() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "# Heading\n").unwrap();

    // First pass writes the TOC; the second --check pass sees it current.
    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--write", test_file.to_str().unwrap()])
        .assert()
        .success();

    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--check", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn test_generate_check_stale() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "# Heading\n").unwrap();

    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--check", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Diff in"));
}

#[test]
fn test_generate_oneshot_block_only() {
    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--oneshot"])
        .write_stdin("# Title\n## Sub\nBody\n")
        .assert()
        .success()
        .stdout("- [Title](#title)\n  - [Sub](#sub)\n");
}

#[test]
fn test_generate_no_anchors() {
    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--oneshot", "--no-anchors"])
        .write_stdin("# Title\n")
        .assert()
        .success()
        .stdout("- Title\n");
}

#[test]
fn test_generate_max_level_flag() {
    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--oneshot", "--max-level", "1"])
        .write_stdin("# A\n## B\n")
        .assert()
        .success()
        .stdout("- [A](#a)\n");
}

#[test]
fn test_generate_profile_flag() {
    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--oneshot", "--profile", "bitbucket"])
        .write_stdin("# Getting started\n")
        .assert()
        .success()
        .stdout("- [Getting started](#markdown-header-getting-started)\n");
}

#[test]
fn test_generate_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    let config_file = temp_dir.path().join(".mdtoc.toml");

    fs::write(&test_file, "# A\n## B\n").unwrap();
    fs::write(&config_file, "one_shot = true\nmax_level = 1\n").unwrap();

    cargo_bin_cmd!("mdtoc")
        .args([
            "generate",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("- [A](#a)\n");
}

#[test]
fn test_generate_discovers_config_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "# A\n").unwrap();
    fs::write(temp_dir.path().join(".mdtoc.toml"), "one_shot = true\n").unwrap();

    cargo_bin_cmd!("mdtoc")
        .args(["generate", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("- [A](#a)\n");
}

#[test]
fn test_generate_missing_file() {
    cargo_bin_cmd!("mdtoc")
        .args(["generate", "/nonexistent/doc.md"])
        .assert()
        .failure();
}

#[test]
fn test_generate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "max_level = \"deep\"").unwrap();

    cargo_bin_cmd!("mdtoc")
        .args(["generate", "--config", config_file.to_str().unwrap()])
        .write_stdin("# A\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
