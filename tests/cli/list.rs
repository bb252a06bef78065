use crate::cli::support::Workspace;
use predicates::prelude::*;

#[test]
fn test_list_empty() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No scrolls stored"));

    assert_eq!(ws.json(&["list"]), serde_json::json!([]));
}

#[test]
fn test_list_shows_glyphs_in_insertion_order() {
    let ws = Workspace::new();
    ws.compress(&["the theorem is proven"], "2025-03-01", Some("mathematics"));
    ws.compress(&["tears of joy"], "2025-03-02", Some("emotional"));

    ws.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("○△"))
        .stdout(predicate::str::contains("○♡"))
        .stdout(predicate::str::contains("○△ ○♡"));

    let listed = ws.json(&["list"]);
    let ids: Vec<u64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 1]);
    assert_eq!(listed[1]["theme"], "emotional");
    assert_eq!(listed[1]["glyph"], "○♡");
}
