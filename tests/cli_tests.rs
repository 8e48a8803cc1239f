//! End-to-end tests for the obra binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn obra() -> Command {
    Command::cargo_bin("obra").unwrap()
}

#[test]
fn units_lists_fixture_batch_with_best_value() {
    obra()
        .arg("units")
        .assert()
        .success()
        .stdout(predicate::str::contains("House 1"))
        .stdout(predicate::str::contains("House 6"))
        .stdout(predicate::str::contains("Best value: House 3"));
}

#[test]
fn schedule_uses_reference_anchor_layout() {
    obra()
        .args(["schedule", "House 1", "--start", "2025-07-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mobilization"))
        .stdout(predicate::str::contains("2025-07-15"))
        // Fifth phase start crosses the weekend to Monday.
        .stdout(predicate::str::contains("2025-07-21"));
}

#[test]
fn schedule_rejects_malformed_anchor() {
    obra()
        .args(["schedule", "House 1", "--start", "15/07/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn schedule_rejects_unknown_unit() {
    obra()
        .args(["schedule", "House 99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown unit"));
}

#[test]
fn simulate_runs_what_ifs_and_compares() {
    obra()
        .args(["simulate", "150:836.47", "Premium=180:900:3.0:1.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation 1"))
        .stdout(predicate::str::contains("Premium"))
        .stdout(predicate::str::contains("Comparison (final cost)"))
        .stdout(predicate::str::contains("House 1"));
}

#[test]
fn simulate_rejects_non_positive_area() {
    obra()
        .args(["simulate", "0:836.47"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn compare_without_specs_shows_batch_only() {
    obra()
        .arg("compare")
        .assert()
        .success()
        .stdout(predicate::str::contains("House 1"))
        .stdout(predicate::str::contains("House 6"));
}

#[test]
fn export_writes_workbook() {
    let dir = tempfile::tempdir().unwrap();
    obra()
        .args(["export", "--out"])
        .arg(dir.path())
        .arg("150:836.47")
        .assert()
        .success();

    assert!(dir.path().join("summary.csv").exists());
    assert!(dir.path().join("phases.csv").exists());
    assert!(dir.path().join("simulations.csv").exists());
    assert!(dir.path().join("session.json").exists());
}

#[test]
fn custom_batch_file_replaces_fixture() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name,area,unit_price").unwrap();
    writeln!(file, "Lot A,100.0,900.0").unwrap();
    writeln!(file, "Lot B,95.0,900.0").unwrap();
    file.flush().unwrap();

    obra()
        .arg("--file")
        .arg(file.path())
        .arg("units")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lot A"))
        .stdout(predicate::str::contains("Best value: Lot B"))
        .stdout(predicate::str::contains("House 1").not());
}

#[test]
fn proposal_renders_text_document() {
    obra()
        .args(["proposal", "Lot 7=150:836.47", "--start", "2025-07-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMERCIAL PROPOSAL"))
        .stdout(predicate::str::contains("Reference: Lot 7"))
        .stdout(predicate::str::contains("Execution schedule"));
}

#[test]
fn credentials_in_settings_gate_access() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(config, "{}", r#"{"credentials": {"admin": "secret"}}"#).unwrap();
    config.flush().unwrap();

    // Missing credentials are rejected.
    obra()
        .arg("--config")
        .arg(config.path())
        .arg("units")
        .env_remove("OBRA_USER")
        .env_remove("OBRA_PASSWORD")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication"));

    // A valid pair passes through to the command.
    obra()
        .arg("--config")
        .arg(config.path())
        .args(["--user", "admin", "--password", "secret", "units"])
        .assert()
        .success()
        .stdout(predicate::str::contains("House 1"));
}
