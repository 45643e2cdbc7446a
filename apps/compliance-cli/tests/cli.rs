use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const COMPLIANT_FIXTURE: &str = r#"
[store]
name = "Paris Vendome"

[brand]
address = "1 Rue de la Paix, 75002 Paris"
phone_number = "+33 1 42 68 53 00"
opening_hours = """
Monday 10:00-19:00
Sunday closed
"""

[retailer]
address = "1 rue de la Paix, 75002 Paris"
phone_number = "0033142685300"
opening_hours = "Monday 10h00-19h00"
"#;

const MISMATCHED_PHONE_FIXTURE: &str = r#"
[store]
name = "Berlin Mitte"

[brand]
address = "Hauptstraße 5, 10115 Berlin"
phone_number = "+49 30 1234 5678"

[retailer]
address = "Hauptstrasse 5, 10115 Berlin"
phone_number = "+49 30 1234 9999"
"#;

fn cmd() -> Command {
    Command::cargo_bin("store-compliance").unwrap()
}

fn write_fixture(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("store.toml");
    fs::write(&path, content).expect("write fixture");
    path.display().to_string()
}

#[test]
fn check_compliant_store() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir, COMPLIANT_FIXTURE);

    cmd()
        .args(["check", "--config", &path])
        .assert()
        .success()
        .stdout(contains("=== Validation Summary: Paris Vendome ==="))
        .stdout(contains("Overall: PASS (3/3 facts compliant)"));
}

#[test]
fn check_non_compliant_store_exits_one() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir, MISMATCHED_PHONE_FIXTURE);

    cmd()
        .args(["check", "--config", &path])
        .assert()
        .code(1)
        .stdout(contains("NUMBER_MISMATCH"))
        .stdout(contains("Hours:   FAIL (MISSING_INFO"));
}

#[test]
fn check_json_output() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir, COMPLIANT_FIXTURE);

    let output = cmd()
        .args(["check", "--config", &path, "--format", "json"])
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["store"], "Paris Vendome");
    assert_eq!(value["compliant"], true);
    assert_eq!(value["summary"]["total"], 3);
    assert_eq!(value["results"][1]["verdict"]["reason"], "COUNTRY_CODE_DIFFERENCE");
}

#[test]
fn address_subcommand() {
    cmd()
        .args([
            "address",
            "--brand",
            "1 Rue de la Paix, 75002 Paris",
            "--retailer",
            "1 rue de la Paix\\n75002 Paris",
        ])
        .assert()
        .success()
        .stdout(contains("Address: PASS (FORMAT_DIFFERENCE_ONLY"));
}

#[test]
fn hours_subcommand_reports_day_mismatch() {
    cmd()
        .args([
            "hours",
            "--brand",
            "Monday 10:00-19:00\\nTuesday 10:00-19:00",
            "--retailer",
            "Monday 10:00-19:00\\nTuesday 11:00-19:00",
        ])
        .assert()
        .code(1)
        .stdout(contains("DAY_HOURS_MISMATCH"));
}

#[test]
fn phone_subcommand_missing_retailer_value() {
    cmd()
        .args(["phone", "--brand", "+33 1 42 68 53 00"])
        .assert()
        .code(1)
        .stdout(contains("MISSING_INFO"));
}

#[test]
fn missing_config_file_exits_two() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.toml");

    cmd()
        .args(["check", "--config"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(contains("Failed to read config file"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cmd().arg("frobnicate").assert().code(2);
}
