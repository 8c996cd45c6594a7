//! CLI integration tests for tix
//!
//! These tests run the `tix` binary against real files and check both the
//! rewritten documents and the printed output.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command instance for the tix binary
fn tix_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("tix"))
}

/// Create a temporary directory holding one document
fn setup_document(text: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todo.tix");
    fs::write(&path, text).unwrap();
    (dir, path)
}

// =============================================================================
// Read-only Commands
// =============================================================================

#[test]
fn test_show_lists_sections() {
    let (_dir, path) = setup_document("intro\nWork:\nalice - a\nbob - b\n\nDone:\nx - y\n");

    tix_cmd()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(preamble)"))
        .stdout(predicate::str::contains("Work:"))
        .stdout(predicate::str::contains("Done:"));
}

#[test]
fn test_show_json() {
    let (_dir, path) = setup_document("Work:\nalice - a\nbob - b\n");

    let output = tix_cmd()
        .args(["show", "--format", "json"])
        .arg(&path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["lines"], 4);
    assert_eq!(json["sections"][0]["title"], "Work:");
    assert_eq!(json["sections"][0]["items"], 2);
    assert_eq!(json["contexts"], serde_json::json!(["alice", "bob"]));
}

#[test]
fn test_contexts_json_with_tab_separators() {
    let (_dir, path) = setup_document("Work:\nalice\t-\tfix bug\nbob -\treview\n");

    let output = tix_cmd()
        .args(["contexts", "--format", "json"])
        .arg(&path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    assert_eq!(stdout.lines().count(), 1);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json[0]["context"], "alice");
    assert_eq!(json[1]["context"], "bob");
    assert_eq!(json[1]["color"], 1);
}

#[test]
fn test_annotate_json_spans() {
    let (_dir, path) = setup_document("Work:\n  alice - a\nDone:\nbob - b\n");

    let output = tix_cmd()
        .args(["annotate", "-f", "json"])
        .arg(&path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["headers"][0]["line"], 0);
    assert_eq!(json["headers"][1]["line"], 2);
    assert_eq!(json["done_items"][0]["line"], 3);

    let alice = &json["contexts"][0];
    assert_eq!(alice["context"], "alice");
    assert_eq!(alice["color"], 0);
    assert_eq!(alice["spans"][0]["start"], 2);
    assert_eq!(alice["spans"][0]["end"], 7);
    assert_eq!(json["contexts"][1]["color"], 1);
}

#[test]
fn test_annotate_uses_project_palette() {
    let (dir, path) = setup_document("P:\nalice - a\nbob - b\ncarol - c\n");
    fs::write(dir.path().join(".tix.toml"), "palette = [\"red\", \"blue\"]\n").unwrap();

    tix_cmd()
        .arg("annotate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"alice\s+red").unwrap())
        .stdout(predicate::str::is_match(r"bob\s+blue").unwrap())
        .stdout(predicate::str::is_match(r"carol\s+red").unwrap());
}

#[test]
fn test_fold_ranges() {
    let (_dir, path) = setup_document("Work:\na - 1\nb - 2\n\nEmpty:\n\nHome:\nc - 3\n");

    tix_cmd()
        .arg("fold")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1-3\tWork:"))
        .stdout(predicate::str::contains("7-8\tHome:"))
        .stdout(predicate::str::contains("Empty:").not());
}

#[test]
fn test_contexts_first_seen() {
    let (_dir, path) = setup_document("P:\nzed - 1\namy - 2\nzed - 3\n");

    let output = tix_cmd()
        .args(["contexts", "--format", "json"])
        .arg(&path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json[0]["context"], "zed");
    assert_eq!(json[1]["context"], "amy");
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    tix_cmd()
        .arg("show")
        .arg(dir.path().join("nope.tix"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open document"));
}

// =============================================================================
// Mark Done
// =============================================================================

#[test]
fn test_done_moves_item() {
    let (_dir, path) = setup_document("Work:\nalice - fix bug\n");

    tix_cmd()
        .args(["done"])
        .arg(&path)
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done: alice - fix bug"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Work:\n\nDone:\nalice - fix bug\n"
    );
}

#[test]
fn test_done_on_header_is_noop() {
    let text = "Work:\nalice - fix bug\n";
    let (_dir, path) = setup_document(text);

    tix_cmd()
        .arg("done")
        .arg(&path)
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to mark done"));

    assert_eq!(fs::read_to_string(&path).unwrap(), text);
}

#[test]
fn test_done_rejects_line_zero() {
    let (_dir, path) = setup_document("Work:\n");

    tix_cmd()
        .arg("done")
        .arg(&path)
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line numbers start at 1"));
}

#[test]
fn test_done_dry_run_leaves_file() {
    let text = "Work:\nalice - a\n\nDone:\nold - x\n";
    let (_dir, path) = setup_document(text);

    tix_cmd()
        .args(["done", "--dry-run"])
        .arg(&path)
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::eq("Work:\n\nDone:\nalice - a\nold - x\n"));

    assert_eq!(fs::read_to_string(&path).unwrap(), text);
}

// =============================================================================
// Sort
// =============================================================================

#[test]
fn test_sort_by_context() {
    let (_dir, path) = setup_document("P:\nbob - y\nalice - x\n");

    tix_cmd()
        .arg("sort")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "P:\nalice - x\nbob - y\n");

    tix_cmd()
        .arg("sort")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Already sorted"));
}

// =============================================================================
// Archive
// =============================================================================

#[test]
fn test_archive_appends_and_clears_done() {
    let (dir, path) = setup_document("Work:\na - open\n\nDone:\nitem1\nitem2\n");

    tix_cmd()
        .arg("archive")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived 2 item(s)"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "Work:\na - open\n\nDone:\n");

    let archive = fs::read_to_string(dir.path().join("todo.tix.archive")).unwrap();
    assert!(archive.starts_with("\nArchived "));
    assert!(archive.ends_with(":\nitem1\nitem2\n"));

    // A second archive has nothing left to move
    tix_cmd()
        .arg("archive")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to archive"));
}

#[test]
fn test_archive_without_done_section() {
    let (dir, path) = setup_document("Work:\na - open\n");

    tix_cmd()
        .arg("archive")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No Done: section"));

    assert!(!dir.path().join("todo.tix.archive").exists());
}

#[test]
fn test_archive_respects_suffix() {
    let (dir, path) = setup_document("Done:\nx\n");
    fs::write(dir.path().join(".tix.toml"), "archive_suffix = \".old\"\n").unwrap();

    tix_cmd().arg("archive").arg(&path).assert().success();

    assert!(dir.path().join("todo.tix.old").is_file());
}

#[test]
fn test_archive_json() {
    let (_dir, path) = setup_document("Done:\nx\ny\n");

    let output = tix_cmd()
        .args(["archive", "--format", "json"])
        .arg(&path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["archived"], 2);
    assert_eq!(json["changed"], true);
}

// =============================================================================
// Verbose Mode
// =============================================================================

#[test]
fn test_verbose_goes_to_stderr() {
    let (_dir, path) = setup_document("P:\nb - 1\na - 2\n");

    tix_cmd()
        .args(["--verbose", "sort", "--dry-run"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:sort]"))
        .stderr(predicate::str::contains("[verbose:edit]"))
        .stdout(predicate::eq("P:\na - 2\nb - 1\n"));
}
