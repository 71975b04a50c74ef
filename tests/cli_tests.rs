//! Integration tests for the harmonizer CLI
//!
//! Runs the binary against temporary Python trees and checks exit codes,
//! JSON output and the configuration commands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Test helper to get the CLI binary
fn harmonizer_cmd() -> Command {
    Command::cargo_bin("harmonizer").unwrap()
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

const DESTRUCTIVE_GETTER: &str = "def get_user(uid):\n    db.delete(uid)\n";
const HARMONIOUS: &str = "def validate_and_save(item):\n    check(item)\n    repo.save(item)\n";

fn json_output(dir: &Path, extra: &[&str]) -> serde_json::Value {
    let output = harmonizer_cmd()
        .arg("analyze")
        .args(["--format", "json"])
        .args(extra)
        .arg(dir)
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_help() {
    harmonizer_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("print-default-config"));
}

#[test]
fn test_cli_version() {
    harmonizer_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("harmonizer"));
}

#[test]
fn test_critical_disharmony_exits_three() {
    let dir = project(&[("service.py", DESTRUCTIVE_GETTER)]);
    harmonizer_cmd()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .code(3)
        .stdout(predicate::str::contains("get_user"))
        .stdout(predicate::str::contains("CRITICAL"));
}

#[test]
fn test_harmonious_code_exits_zero() {
    let dir = project(&[("service.py", HARMONIOUS)]);
    harmonizer_cmd()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No disharmony found"));
}

#[test]
fn test_threshold_flag_raises_the_bar() {
    let dir = project(&[("service.py", DESTRUCTIVE_GETTER)]);
    harmonizer_cmd()
        .arg("analyze")
        .args(["--threshold", "2.0"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn test_json_output_shape() {
    let dir = project(&[
        ("pkg/service.py", DESTRUCTIVE_GETTER),
        ("pkg/store.py", HARMONIOUS),
    ]);
    let json = json_output(dir.path(), &[]);

    let units = json["units"].as_array().unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(json["summary"]["total_units"], 2);
    assert_eq!(json["summary"]["disharmonious"], 1);
    assert_eq!(json["summary"]["worst_severity"], "critical");

    let getter = units.iter().find(|u| u["name"] == "get_user").unwrap();
    assert_eq!(getter["severity"], "critical");
    assert_eq!(getter["trajectory"]["from"], "wisdom");
    assert_eq!(getter["trajectory"]["to"], "power");
    assert_eq!(getter["intent"]["coordinates"].as_array().unwrap().len(), 4);
    assert!(!getter["naming_suggestions"].as_array().unwrap().is_empty());
}

#[test]
fn test_no_suggest_and_top_n() {
    let dir = project(&[("service.py", DESTRUCTIVE_GETTER)]);

    let json = json_output(dir.path(), &["--no-suggest"]);
    assert!(json["units"][0]["naming_suggestions"]
        .as_array()
        .unwrap()
        .is_empty());

    let json = json_output(dir.path(), &["--top-n", "1"]);
    assert_eq!(
        json["units"][0]["naming_suggestions"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_vendor_directories_are_skipped() {
    let dir = project(&[
        ("app.py", HARMONIOUS),
        ("venv/lib/bad.py", DESTRUCTIVE_GETTER),
        (".hidden/bad.py", DESTRUCTIVE_GETTER),
    ]);
    harmonizer_cmd()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn test_missing_path_exits_four() {
    harmonizer_cmd()
        .args(["analyze", "/definitely/not/a/project"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_config_file_threshold_is_used() {
    let dir = project(&[
        ("service.py", DESTRUCTIVE_GETTER),
        ("harmonizer.yml", "threshold: 2.0\n"),
    ]);
    harmonizer_cmd()
        .arg("analyze")
        .arg("--config")
        .arg(dir.path().join("harmonizer.yml"))
        .arg(dir.path().join("service.py"))
        .assert()
        .success();
}

#[test]
fn test_print_default_config() {
    harmonizer_cmd()
        .arg("print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("threshold: 0.5"))
        .stdout(predicate::str::contains("top_n: 3"));
}

#[test]
fn test_validate_config_accepts_valid_file() {
    let dir = project(&[(
        "harmonizer.yml",
        "threshold: 0.6\nnaming:\n  top_n: 2\nlexicon:\n  overrides:\n    - token: render\n      coordinates: [0.1, 0.0, 0.6, 0.3]\n",
    )]);
    harmonizer_cmd()
        .arg("validate-config")
        .arg(dir.path().join("harmonizer.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_validate_config_rejects_invalid_file() {
    let dir = project(&[("harmonizer.yml", "threshold: -1.0\n")]);
    harmonizer_cmd()
        .arg("validate-config")
        .arg(dir.path().join("harmonizer.yml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("validation failed"));
}
