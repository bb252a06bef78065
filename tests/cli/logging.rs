use crate::cli::support::Workspace;
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["--log-level", "debug", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_emits_json_lines() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["--log-level", "debug", "--log-json", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"parse_args\""));
}
