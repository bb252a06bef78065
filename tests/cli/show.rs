use crate::cli::support::Workspace;
use predicates::prelude::*;

#[test]
fn test_show_human() {
    let ws = Workspace::new();
    ws.compress(
        &["the ψ field hums", "a soul-braid forms"],
        "2025-03-01T10:00:00",
        Some("spiritual"),
    );

    ws.cmd()
        .args(["show", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scroll 0"))
        .stdout(predicate::str::contains("Theme: spiritual"))
        .stdout(predicate::str::contains("Created: 2025-03-01T10:00:00"))
        .stdout(predicate::str::contains("Preserved:"))
        .stdout(predicate::str::contains("soul-braid"));
}

#[test]
fn test_show_unknown_scroll() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["show", "4"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("scroll not found: 4"));
}
