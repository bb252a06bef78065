use crate::cli::support::{scrollkeep, Workspace};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_state_is_data_error() {
    let dir = tempdir().unwrap();
    scrollkeep()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("scrollkeep init"));
}

#[test]
fn test_missing_state_json_envelope() {
    let dir = tempdir().unwrap();
    let output = scrollkeep()
        .current_dir(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let error: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["type"], "state_not_found");
}

#[test]
fn test_corrupted_state_is_data_error() {
    let ws = Workspace::new();
    std::fs::write(ws.state_file(), r#"{"term_index": {}}"#).unwrap();

    ws.cmd()
        .arg("list")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("missing required key `scrolls`"));
}

#[test]
fn test_usage_error_json_envelope() {
    let output = scrollkeep()
        .args(["--format", "json", "recall"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let error: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["type"], "usage_error");
}

#[test]
fn test_no_command_prints_version() {
    scrollkeep()
        .assert()
        .success()
        .stdout(predicate::str::contains("scrollkeep"));
}

#[test]
fn test_help_lists_commands() {
    scrollkeep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: scrollkeep"))
        .stdout(predicate::str::contains("compress"))
        .stdout(predicate::str::contains("recall"));
}

#[test]
fn test_state_file_round_trips_through_commands() {
    let ws = Workspace::new();
    assert!(ws.path().join(".scrollkeep").is_dir());
    ws.compress(&["the theorem is proven"], "2025-03-01", None);
    ws.cmd().args(["recall", "theorem", "--at", "2025-03-02"]).assert().success();

    let state: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(ws.state_file()).unwrap()).unwrap();
    assert_eq!(state["scrolls"][0]["access_count"], 1);
    assert_eq!(state["term_index"]["theorem"], 1);
    assert!(state["codex"]["mathematics"].is_object());
}
