// Regression tests: CLI exit codes and miette diagnostic rendering.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::tempdir;

const SAMPLE: &str = "\
story,name,description,c3,c4,c5,c6,c7,c8,c9,precondition,step,step description
US1,TC001_Login,Verify login,,,,,,,,Pre: app open,1,Enter username
US2,TC002_Logout,Verify logout,,,,,,,,Pre: logged in,1,Click logout
";

#[test]
fn cli_reports_diagnostic_on_missing_source() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("tcdoc").unwrap();
    cmd.arg("generate")
        .arg(dir.path().join("no_such_export.csv"))
        .arg(dir.path().join("docs"));
    cmd.assert().failure().stderr(contains("tcdoc::input"));
}

#[test]
fn cli_generates_documents_from_valid_export() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("export.csv");
    fs::write(&source, SAMPLE).unwrap();
    let dest = dir.path().join("docs");

    let mut cmd = Command::cargo_bin("tcdoc").unwrap();
    cmd.arg("generate").arg(&source).arg(&dest);
    cmd.assert()
        .success()
        .stdout(contains("Successfully generated 2 test case documents."));

    assert!(dest.join("TC001_Login.md").is_file());
    assert!(dest.join("TC002_Logout.md").is_file());
}

#[test]
fn cli_warns_and_exits_zero_on_header_only_export() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("export.csv");
    fs::write(&source, "just,a,header\n").unwrap();

    let mut cmd = Command::cargo_bin("tcdoc").unwrap();
    cmd.arg("generate").arg(&source).arg(dir.path().join("docs"));
    cmd.assert()
        .success()
        .stdout(contains("No test cases were read"));
}

#[test]
fn cli_list_prints_case_numbers() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("export.csv");
    fs::write(&source, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("tcdoc").unwrap();
    cmd.arg("list").arg(&source);
    cmd.assert()
        .success()
        .stdout(contains("TC001_Login (TC001)").and(contains("2 test case(s).")));
}

#[test]
fn cli_list_json_is_parseable() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("export.csv");
    fs::write(&source, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("tcdoc").unwrap();
    cmd.arg("list").arg(&source).arg("--json");
    let output = cmd.assert().success().get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["case_number"], "TC001");
    assert_eq!(records[1]["steps"][0], "1 - Click logout");
}
