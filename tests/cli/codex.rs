use crate::cli::support::Workspace;
use predicates::prelude::*;

#[test]
fn test_codex_groups_scrolls_by_theme() {
    let ws = Workspace::new();
    ws.compress(&["the theorem is proven"], "2025-03-01", Some("mathematics"));
    ws.compress(&["tears of joy"], "2025-03-02", Some("emotional"));
    ws.compress(&["a manifold proof"], "2025-03-03", Some("mathematics"));

    let codex = ws.json(&["codex"]);
    assert_eq!(codex["mathematics"]["scrolls"], serde_json::json!([0, 2]));
    assert_eq!(codex["mathematics"]["last_accessed"], "2025-03-03");
    assert_eq!(codex["emotional"]["scrolls"], serde_json::json!([1]));

    ws.cmd()
        .arg("codex")
        .assert()
        .success()
        .stdout(predicate::str::contains("mathematics"))
        .stdout(predicate::str::contains("ids: 0, 2"));
}

#[test]
fn test_codex_empty() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("codex")
        .assert()
        .success()
        .stdout(predicate::str::contains("Codex is empty"));
}
