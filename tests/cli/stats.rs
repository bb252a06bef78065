use crate::cli::support::Workspace;
use predicates::prelude::*;

#[test]
fn test_stats_counts() {
    let ws = Workspace::new();
    ws.compress(&["the theorem is proven"], "2025-03-01", None);
    ws.compress(&["tears of joy"], "2025-03-01", None);

    let stats = ws.json(&["stats", "--at", "2025-03-01"]);
    assert_eq!(stats["scroll_count"], 2);
    assert_eq!(stats["theme_count"], 2);
    assert_eq!(stats["vocabulary_size"], 7);
    assert_eq!(stats["retained_terms"], 7);
    assert_eq!(stats["at"], "2025-03-01");
    assert!(stats["breath_factor"].as_f64().unwrap() < 1.0);

    ws.cmd()
        .args(["stats", "--at", "2025-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scrolls: 2"))
        .stdout(predicate::str::contains("Breath factor:"));
}

#[test]
fn test_stats_vitality_decays() {
    let ws = Workspace::new();
    ws.compress(&["the theorem is proven"], "2025-03-01", None);

    let fresh = ws.json(&["stats", "--at", "2025-03-01"]);
    let later = ws.json(&["stats", "--at", "2025-04-01"]);
    assert!(
        later["total_vitality"].as_f64().unwrap() < fresh["total_vitality"].as_f64().unwrap()
    );
}
