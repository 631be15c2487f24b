//! CLI integration tests for the Conductor command-line interface.
//!
//! Runs the real binary against a throwaway config (embedded engine,
//! temp registry and audit dirs). The embedded engine's lifecycle
//! state is per-process, so assertions stay within one invocation.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the conductor binary, configured against `dir`.
fn conductor(dir: &Path) -> Command {
    let config_path = dir.join("conductor.toml");
    if !config_path.exists() {
        let config = format!(
            r#"
[registry]
db_path = "{}"

[audit]
dir = "{}"

[engine]
kind = "embedded"
"#,
            dir.join("registry.db").display(),
            dir.join("audit").display(),
        );
        std::fs::write(&config_path, config).unwrap();
    }

    let mut cmd = Command::cargo_bin("conductor").unwrap();
    cmd.env("CONDUCTOR_CONFIG", &config_path);
    cmd
}

fn write_definition(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(format!("{name}.json"));
    std::fs::write(&path, format!(r#"{{"name": "{name}", "frequency": "hourly"}}"#)).unwrap();
    path
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    Command::cargo_bin("conductor")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conductor"))
        .stdout(predicate::str::contains("lifecycle coordinator"));
}

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("conductor")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("schedule"))
        .stdout(predicate::str::contains("submit-and-schedule"))
        .stdout(predicate::str::contains("suspend"))
        .stdout(predicate::str::contains("resume"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version_displays() {
    Command::cargo_bin("conductor")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("conductor"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Lifecycle Commands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_submit_then_list() {
    let dir = tempfile::tempdir().unwrap();
    let definition = write_definition(dir.path(), "sales-feed");

    conductor(dir.path())
        .args(["submit", "feed"])
        .arg(&definition)
        .assert()
        .success()
        .stdout(predicate::str::contains("sales-feed(FEED) submitted successfully"));

    conductor(dir.path())
        .args(["list", "feed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sales-feed"));
}

#[test]
fn test_duplicate_submit_fails() {
    let dir = tempfile::tempdir().unwrap();
    let definition = write_definition(dir.path(), "sales-feed");

    conductor(dir.path())
        .args(["submit", "feed"])
        .arg(&definition)
        .assert()
        .success();

    conductor(dir.path())
        .args(["submit", "feed"])
        .arg(&definition)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_submit_and_schedule_reports_resolved_name() {
    let dir = tempfile::tempdir().unwrap();
    let definition = write_definition(dir.path(), "nightly-rollup");

    conductor(dir.path())
        .args(["submit-and-schedule", "process"])
        .arg(&definition)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "nightly-rollup(PROCESS) scheduled successfully",
        ));
}

#[test]
fn test_cluster_suspend_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    conductor(dir.path())
        .args(["suspend", "cluster", "primary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be scheduled"));
}

#[test]
fn test_unknown_type_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    conductor(dir.path())
        .args(["schedule", "topology", "t1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown entity type"));
}

#[test]
fn test_schedule_unsubmitted_entity_fails() {
    let dir = tempfile::tempdir().unwrap();

    conductor(dir.path())
        .args(["schedule", "feed", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_json_output_shape() {
    let dir = tempfile::tempdir().unwrap();
    let definition = write_definition(dir.path(), "sales-feed");

    conductor(dir.path())
        .args(["--json", "submit", "feed"])
        .arg(&definition)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"SUCCEEDED\""));
}

#[test]
fn test_audit_trail_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let definition = write_definition(dir.path(), "sales-feed");

    conductor(dir.path())
        .args(["submit", "feed"])
        .arg(&definition)
        .assert()
        .success();

    let audit_dir = dir.path().join("audit");
    let entries: Vec<_> = std::fs::read_dir(&audit_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let contents = std::fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
    assert!(contents.contains("\"SUBMIT\""));
}
