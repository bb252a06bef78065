use crate::cli::support::Workspace;
use predicates::prelude::*;

// ============================================================================
// Compress command tests
// ============================================================================

#[test]
fn test_compress_keeps_anchors_and_heaviest_fragment() {
    let ws = Workspace::with_init_args(&["--k-modes", "3"]);

    let id = ws.compress(
        &[
            "A realization moment",
            "routine text",
            "another realization with tears",
            "more text",
            "final thought",
        ],
        "2025-03-01T10:00:00",
        None,
    );
    assert_eq!(id, 0);

    let scroll = ws.json(&["show", "0"]);
    assert_eq!(
        scroll["essence"],
        serde_json::json!([
            "A realization moment",
            "another realization with tears",
            "final thought"
        ])
    );
    assert_eq!(scroll["id"], 0);
    assert_eq!(scroll["access_count"], 0);
}

#[test]
fn test_compress_assigns_sequential_ids() {
    let ws = Workspace::new();
    assert_eq!(ws.compress(&["first segment"], "2025-03-01", None), 0);
    assert_eq!(ws.compress(&["second segment"], "2025-03-02", None), 1);
    assert_eq!(ws.compress(&["third segment"], "2025-03-03", None), 2);
}

#[test]
fn test_compress_reads_stdin_lines() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["compress", "--timestamp", "2025-03-01", "--theme", "technical"])
        .write_stdin("the compiler works\n\nthe algorithm converges\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored scroll 0"))
        .stdout(predicate::str::contains("[technical]"));

    let scroll = ws.json(&["show", "0"]);
    assert_eq!(scroll["original_fragment_count"], 2);
}

#[test]
fn test_compress_json_output() {
    let ws = Workspace::new();
    let scroll = ws.json(&[
        "compress",
        "--timestamp",
        "2025-03-01",
        "-m",
        "the theorem is proven",
        "-m",
        "tears of joy",
    ]);

    assert_eq!(scroll["id"], 0);
    assert_eq!(scroll["context"]["theme"], "mathematics");
    assert_eq!(scroll["themes"], serde_json::json!(["mathematics", "emotional"]));
    assert!(scroll["tcs"]["grade"].is_string());
}

#[test]
fn test_compress_without_messages_is_usage_error() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("compress")
        .write_stdin("\n\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("nothing to compress"));
}

#[test]
fn test_compress_rejects_bad_timestamp() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["compress", "-m", "text", "--timestamp", "whenever"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--timestamp"));
}
