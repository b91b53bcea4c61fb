//! The `catsearch` binary.

use std::process::Command;

use super::common::fixture;

fn catsearch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_catsearch"));
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_run_writes_plain_blocks() {
    let output = catsearch()
        .arg("run")
        .arg("--catalog")
        .arg(fixture("catalog.csv"))
        .arg("--queries")
        .arg(fixture("queries.txt"))
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("red shoe\n5\n1.0,Red,Shoe\n"));
}

#[test]
fn test_run_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("results.txt");

    let status = catsearch()
        .arg("run")
        .arg("-c")
        .arg(fixture("catalog.csv"))
        .arg("-q")
        .arg(fixture("queries.txt"))
        .arg("-o")
        .arg(&target)
        .status()
        .unwrap();

    assert!(status.success());
    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.contains("\nblue hat\n1\n"));
}

#[test]
fn test_query_subcommand_with_limit() {
    let output = catsearch()
        .args(["query", "--limit", "1", "-c"])
        .arg(fixture("catalog.csv"))
        .arg("red shoe")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "red shoe\n5\n1.0,Red,Shoe\n\n"
    );
}

#[test]
fn test_query_words_form_one_query() {
    let output = catsearch()
        .args(["query", "--limit", "1", "-c"])
        .arg(fixture("catalog.csv"))
        .args(["red", "shoe"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "red shoe\n5\n1.0,Red,Shoe\n\n"
    );
}

#[test]
fn test_pretty_output_file_has_no_escapes() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("pretty.txt");

    let status = catsearch()
        .env_remove("NO_COLOR")
        .env("CATSEARCH_THEME", "dark")
        .arg("run")
        .arg("-c")
        .arg(fixture("catalog.csv"))
        .arg("-q")
        .arg(fixture("queries.txt"))
        .args(["--format", "pretty", "-o"])
        .arg(&target)
        .status()
        .unwrap();

    assert!(status.success());
    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.contains("5 matches"));
    assert!(!written.contains('\x1b'), "{:?}", written);
}

#[test]
fn test_missing_catalog_exits_nonzero() {
    let output = catsearch()
        .args(["query", "-c", "no-such-catalog.csv", "red"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-catalog.csv"), "{}", stderr);
}

#[test]
fn test_zero_limit_rejected() {
    let output = catsearch()
        .args(["query", "--limit", "0", "-c"])
        .arg(fixture("catalog.csv"))
        .arg("red")
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_inspect_reports_record_count() {
    let output = catsearch()
        .arg("inspect")
        .arg("-c")
        .arg(fixture("catalog.csv"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("records       6"), "{}", stdout);
}
