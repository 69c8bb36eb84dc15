//! Integration tests for the budget ledger CLI.
//!
//! These tests run the actual binary and verify output against expected files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

fn budget_ledger() -> Command {
    Command::cargo_bin("budget-ledger").unwrap()
}

/// Run the binary with the given arguments and return stdout
fn run_ledger(args: &[&str]) -> String {
    let assert = budget_ledger().args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn script_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_sample_session_without_arguments() {
    let output = run_ledger(&[]);
    let expected = fs::read_to_string(test_data_path("expected_sample_session.txt")).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_script_report() {
    let output = run_ledger(&[&test_data_path("sample_script.csv")]);
    let expected = fs::read_to_string(test_data_path("expected_script_report.txt")).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_script_from_temp_file() {
    let file = script_file(
        "type,category,amount,description,destination
open,Travel
deposit,Travel,250.5,savings
withdraw,Travel,100,train tickets",
    );

    budget_ledger()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("savings              +250.50"))
        .stdout(predicate::str::contains("train tickets          -100.00"))
        .stdout(predicate::str::contains("Total: 150.50"))
        .stdout(predicate::str::contains("  60 | o \n"))
        .stdout(predicate::str::contains("  70 |   \n"));
}

#[test]
fn test_skipped_rows_do_not_fail_the_run() {
    let file = script_file(
        "type,category,amount,description,destination
open,Home
deposit,Home,ten,not a number
withdraw,Garden,5,unknown category
deposit,Home,40,rent",
    );

    budget_ledger()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 40.00"))
        .stdout(predicate::str::contains("not a number").not());
}

#[test]
fn test_missing_file_reports_error() {
    budget_ledger()
        .arg("tests/data/does_not_exist.csv")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: I/O error"));
}

#[test]
fn test_script_without_categories_reports_error() {
    let file = script_file("type,category,amount,description,destination\n");

    budget_ledger()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one category"));
}
