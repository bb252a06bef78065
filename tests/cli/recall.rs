use crate::cli::support::Workspace;
use predicates::prelude::*;

// ============================================================================
// Recall command tests
// ============================================================================

fn themed_workspace() -> Workspace {
    let ws = Workspace::new();
    ws.compress(
        &["the theorem is proven", "a second proof step"],
        "2025-03-01T10:00:00",
        Some("mathematics"),
    );
    ws.compress(
        &["tears of joy", "so grateful tonight"],
        "2025-03-01T10:00:00",
        Some("emotional"),
    );
    ws
}

#[test]
fn test_recall_theme_filter_excludes_other_themes() {
    let ws = themed_workspace();
    let result = ws.json(&[
        "recall",
        "theorem",
        "--theme",
        "emotional",
        "--at",
        "2025-03-02T10:00:00",
    ]);
    assert_eq!(result["count"], 0);
    assert_eq!(result["results"], serde_json::json!([]));
}

#[test]
fn test_recall_returns_matching_scroll_with_meta() {
    let ws = themed_workspace();
    let result = ws.json(&["recall", "theorem", "--at", "2025-03-02T10:00:00"]);

    assert_eq!(result["count"], 1);
    let hit = &result["results"][0];
    assert_eq!(hit["scroll"]["id"], 0);
    assert_eq!(hit["meta"]["theme_matched"], true);
    assert!(hit["meta"]["relevance"].as_f64().unwrap() > 0.0);
    assert!(hit["meta"]["decay"].as_f64().unwrap() < 1.0);
}

#[test]
fn test_recall_persists_access_for_returned_scrolls_only() {
    let ws = themed_workspace();
    ws.cmd()
        .args(["recall", "theorem", "--at", "2025-03-05T00:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. scroll 0"));

    let first = ws.json(&["show", "0"]);
    assert_eq!(first["access_count"], 1);
    assert_eq!(first["last_accessed"], "2025-03-05T00:00:00");

    let second = ws.json(&["show", "1"]);
    assert_eq!(second["access_count"], 0);
    assert_eq!(second["last_accessed"], "2025-03-01T10:00:00");
}

#[test]
fn test_recall_empty_store() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["recall", "anything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scrolls found"));
}

#[test]
fn test_recall_top_zero_returns_nothing() {
    let ws = themed_workspace();
    let result = ws.json(&["recall", "theorem", "--top", "0"]);
    assert_eq!(result["count"], 0);
}

#[test]
fn test_recall_order_is_stable_across_runs() {
    let ws = Workspace::new();
    ws.compress(&["compiler pipeline notes"], "2025-03-01", None);
    ws.compress(&["compiler compiler notes"], "2025-03-01", None);
    ws.compress(&["gardening notes"], "2025-03-01", None);

    let ids = |value: serde_json::Value| -> Vec<u64> {
        value["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|hit| hit["scroll"]["id"].as_u64().unwrap())
            .collect()
    };

    let first = ids(ws.json(&["recall", "compiler", "--at", "2025-03-01"]));
    let second = ids(ws.json(&["recall", "compiler", "--at", "2025-03-01"]));
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_recall_config_override_is_not_persisted() {
    let ws = themed_workspace();
    let config = ws.path().join("sharp.toml");
    std::fs::write(&config, "theme_boost = 0.9\n").unwrap();
    let config = config.to_string_lossy().to_string();

    let result = ws.json(&["--config", &config, "recall", "theorem", "--at", "2025-03-02"]);
    assert_eq!(result["count"], 1);
    assert_eq!(result["results"][0]["scroll"]["access_count"], 1);

    let state: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(ws.state_file()).unwrap()).unwrap();
    assert_eq!(state["config"]["theme_boost"], 0.3);
    assert_eq!(state["scrolls"][0]["access_count"], 1);
}
