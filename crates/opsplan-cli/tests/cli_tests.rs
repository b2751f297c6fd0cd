//! End-to-end tests for the opsplan binary.
//!
//! Each test runs the real binary against a temporary database file, so
//! these cover argument parsing, board wiring and rendering together.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn opsplan(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("opsplan").unwrap();
    cmd.arg("--no-color").arg("--database-file").arg(db_path);
    cmd
}

fn temp_db() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("opsplan.db");
    (dir, path)
}

#[test]
fn test_list_on_empty_database() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_debug_logging_reports_database_file() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .env("RUST_LOG", "debug")
        .args(["plan", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Using database file"));
}

#[test]
fn test_default_command_lists_plans() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_create_and_show_plan() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .args([
            "plan",
            "create",
            "Stabilize line 3",
            "--shift",
            "day",
            "--created-by",
            "shift-lead",
            "--task",
            "Reassign floater to packing",
            "--task",
            "Slow conveyor to 80%",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"));

    opsplan(&db)
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stabilize line 3"))
        .stdout(predicate::str::contains("Reassign floater to packing"))
        .stdout(predicate::str::contains("draft"));
}

#[test]
fn test_show_missing_plan_reports_error_without_failing() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .args(["plan", "show", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan with ID 42 not found"));
}

#[test]
fn test_execute_then_complete_flow() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .args(["plan", "create", "Clear backlog", "--task", "Drain queue"])
        .assert()
        .success();

    opsplan(&db)
        .args(["plan", "execute", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: active"));

    opsplan(&db)
        .args(["task", "done", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: done"));

    opsplan(&db)
        .args(["plan", "complete", "1", "complete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed plan 1"))
        .stdout(predicate::str::contains("with outcome: partial"));
}

#[test]
fn test_complete_with_handoff_creates_carryover_draft() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .args([
            "plan",
            "create",
            "Night prep",
            "--shift",
            "day",
            "--execute",
            "--task",
            "Restock staging area",
        ])
        .assert()
        .success();

    opsplan(&db)
        .args(["plan", "complete", "1", "handoff", "--notes", "Out of time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carryover draft created: 2"))
        .stdout(predicate::str::contains("Handoff: Night prep"));

    opsplan(&db)
        .args(["plan", "list", "--status", "draft"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Handoff: Night prep"));
}

#[test]
fn test_stop_requires_known_reason() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .args(["plan", "create", "Tune feeder", "--execute"])
        .assert()
        .success();

    opsplan(&db)
        .args(["plan", "stop", "1", "because"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    opsplan(&db)
        .args(["plan", "stop", "1", "not-working", "--notes", "No effect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: abandoned"));
}

#[test]
fn test_comment_and_activity_feed() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .args(["plan", "create", "Swap sensor", "--execute"])
        .assert()
        .success();

    opsplan(&db)
        .args(["plan", "comment", "1", "Vendor confirmed part number"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment added to plan 1"));

    opsplan(&db)
        .args(["plan", "activity", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vendor confirmed part number"));
}

#[test]
fn test_discard_rejects_active_plan() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .args(["plan", "create", "Hot fix", "--execute"])
        .assert()
        .success();

    opsplan(&db)
        .args(["plan", "discard", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only drafts can be discarded"));
}

#[test]
fn test_preview_renders_snapshot() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .args([
            "plan",
            "create",
            "Rebalance stations",
            "--impact",
            "throughput=72:81",
        ])
        .assert()
        .success();

    opsplan(&db)
        .args([
            "plan",
            "preview",
            "1",
            "--before",
            "68.0",
            "--after",
            "83.0",
            "--alerts-resolved",
            "2",
            "--root-cause",
            "conveyor wear",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview of plan 1"))
        .stdout(predicate::str::contains("Projected Impact"))
        .stdout(predicate::str::contains("throughput: 72 → 81 (+9)"))
        .stdout(predicate::str::contains("conveyor wear"));
}

#[test]
fn test_create_rejects_malformed_impact() {
    let (_dir, db) = temp_db();

    opsplan(&db)
        .args(["plan", "create", "Rebalance stations", "--impact", "throughput"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category=base:projected"));
}
