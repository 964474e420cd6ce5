//! CLI contract tests for the fit pipeline.
//!
//! These tests validate the CLI behavior including:
//! - Help output shows fit and hides fit-json
//! - Human-readable fit output shape
//! - JSON envelope fields and error envelopes
//! - Option precedence: flag > polyrec.toml > file "k" > default

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Get the CLI command
#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("polyrec_cli").unwrap()
}

/// A testcase whose samples decode to y = 2, 4, 3 at x = 1, 2, 3; the
/// unique quadratic through them is -3 + 6.5x - 1.5x^2.
const QUADRATIC_CASE: &str = r#"{
    "keys": { "n": 3, "k": 3 },
    "1": { "base": "2", "value": "100" },
    "2": { "base": "3", "value": "10000" },
    "3": { "base": "5", "value": "1000" }
}"#;

fn write_case(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_help_shows_fit_and_hides_fit_json() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fit"))
        .stdout(predicate::str::contains("help"))
        .stdout(predicate::str::contains("fit-json").not());
}

#[test]
fn test_fit_prints_sample_logs_and_coefficients() {
    let dir = TempDir::new().unwrap();
    let path = write_case(&dir, QUADRATIC_CASE);

    cli()
        .arg("fit")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("log base 2 of 100 = 2.0000000000"))
        .stdout(predicate::str::contains("log base 3 of 10000 = 4.0000000000"))
        .stdout(predicate::str::contains(
            "Polynomial coefficients (lowest degree to highest):",
        ))
        .stdout(predicate::str::contains("a[0] = -3.0000000000"))
        .stdout(predicate::str::contains("a[1] = 6.5000000000"))
        .stdout(predicate::str::contains("a[2] = -1.5000000000"));
}

#[test]
fn test_fit_precision_flag_controls_decimals() {
    let dir = TempDir::new().unwrap();
    let path = write_case(&dir, QUADRATIC_CASE);

    cli()
        .args(["fit", path.to_str().unwrap(), "--precision", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a[1] = 6.50"))
        .stdout(predicate::str::contains("6.5000000000").not());
}

#[test]
fn test_fit_json_envelope_shape() {
    let dir = TempDir::new().unwrap();
    let path = write_case(&dir, QUADRATIC_CASE);

    let output = cli()
        .args(["fit-json", path.to_str().unwrap()])
        .output()
        .expect("Failed to run CLI");

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: Value = serde_json::from_str(&stdout).expect("Invalid JSON output");

    assert_eq!(json["ok"], true);
    assert_eq!(json["points_used"], 3);
    assert_eq!(json["degree"], 2);
    assert_eq!(json["samples"].as_array().unwrap().len(), 3);
    assert_eq!(json["samples"][0]["base"], 2);
    assert_eq!(json["samples"][0]["digits"], "100");
    assert!(json["timings_us"]["total_us"].is_u64());

    let coefficients = json["coefficients"].as_array().unwrap();
    let expected = [-3.0, 6.5, -1.5];
    for (value, want) in coefficients.iter().zip(expected) {
        assert!((value.as_f64().unwrap() - want).abs() < 1e-6);
    }
}

#[test]
fn test_points_flag_overrides_file_k() {
    let dir = TempDir::new().unwrap();
    let path = write_case(&dir, QUADRATIC_CASE);

    let output = cli()
        .args(["fit-json", path.to_str().unwrap(), "--points", "2"])
        .output()
        .expect("Failed to run CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["ok"], true);
    assert_eq!(json["points_used"], 2);
    assert_eq!(json["degree"], 1);
}

#[test]
fn test_config_file_overrides_file_k() {
    let dir = TempDir::new().unwrap();
    let path = write_case(&dir, QUADRATIC_CASE);
    fs::write(dir.path().join("polyrec.toml"), "points = 2\nprecision = 4\n").unwrap();

    let output = cli()
        .current_dir(dir.path())
        .args(["fit-json", path.to_str().unwrap()])
        .output()
        .expect("Failed to run CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["ok"], true);
    assert_eq!(json["points_used"], 2);
}

#[test]
fn test_fit_fails_on_missing_file() {
    cli()
        .args(["fit", "no_such_file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_insufficient_samples_error_envelope() {
    let dir = TempDir::new().unwrap();
    let path = write_case(
        &dir,
        r#"{
            "keys": { "n": 2, "k": 7 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "10", "value": "16" }
        }"#,
    );

    let output = cli()
        .args(["fit-json", path.to_str().unwrap()])
        .output()
        .expect("Failed to run CLI");

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["ok"], false);
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("Not enough samples"), "got: {error}");
    assert!(error.contains('7') && error.contains('2'), "got: {error}");
}

#[test]
fn test_insufficient_samples_fails_fit() {
    let dir = TempDir::new().unwrap();
    let path = write_case(
        &dir,
        r#"{ "keys": { "k": 3 }, "1": { "base": "10", "value": "4" } }"#,
    );

    cli()
        .arg("fit")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not enough samples"));
}

#[test]
fn test_invalid_digit_error_envelope() {
    let dir = TempDir::new().unwrap();
    let path = write_case(
        &dir,
        r#"{ "keys": { "k": 1 }, "1": { "base": "2", "value": "102" } }"#,
    );

    let output = cli()
        .args(["fit-json", path.to_str().unwrap()])
        .output()
        .expect("Failed to run CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["ok"], false);
    assert!(json["error"].as_str().unwrap().contains("Invalid digit"));
    assert!(json["input"].as_str().is_some());
}

#[test]
fn test_malformed_json_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_case(&dir, "{ not json");

    cli()
        .arg("fit")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
