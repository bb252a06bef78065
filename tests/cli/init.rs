use crate::cli::support::{scrollkeep, Workspace};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_creates_state_file() {
    let dir = tempdir().unwrap();

    scrollkeep()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized scrollkeep state"));

    let state: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(".scrollkeep/state.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(state["scrolls"], serde_json::json!([]));
    assert_eq!(state["config"]["k_modes"], 5);
}

#[test]
fn test_init_refuses_existing_state_without_force() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("init")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    ws.cmd().args(["init", "--force"]).assert().success();
}

#[test]
fn test_init_flags_set_config() {
    let ws = Workspace::with_init_args(&["--k-modes", "3", "--gamma-decay", "0.1"]);
    let stats = ws.json(&["stats"]);
    assert_eq!(stats["config"]["k_modes"], 3);
    assert_eq!(stats["config"]["gamma_decay"], 0.1);
}

#[test]
fn test_init_reads_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("engine.toml");
    std::fs::write(&config, "k_modes = 2\ntheme_boost = 0.0\n").unwrap();

    scrollkeep()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"k_modes\": 2"));
}

#[test]
fn test_init_explicit_state_path() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("elsewhere").join("memory.json");

    scrollkeep()
        .arg("--state")
        .arg(&state)
        .arg("init")
        .assert()
        .success();

    assert!(state.exists());
}
