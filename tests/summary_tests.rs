//! Summary, tree, and chart output tests

mod common;

use common::{est, setup_project};
use predicates::prelude::*;

#[test]
fn test_summary_table_lists_every_scope() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUBSYSTEM"))
        .stdout(predicate::str::contains("Flight Software"))
        .stdout(predicate::str::contains("Navigation"))
        .stdout(predicate::str::contains("Other"))
        .stdout(predicate::str::contains("Total effort: 42.0"));
}

#[test]
fn test_summary_json_is_machine_readable() {
    let tmp = setup_project();

    let output = est()
        .current_dir(tmp.path())
        .args(["summary", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["total_effort"], 42.0);
    assert_eq!(report["subsystems"][0]["name"], "Flight Software");
    assert_eq!(report["subsystems"][0]["modules"][0]["effort"], 30.0);
}

#[test]
fn test_summary_yaml_format() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["summary", "-f", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total_effort: 42.0"))
        .stdout(predicate::str::contains("name: Flight Software"));
}

#[test]
fn test_summary_reflects_disabled_modules() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["toggle", "MOD@2", "off"])
        .assert()
        .success();

    est()
        .current_dir(tmp.path())
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("off"))
        .stdout(predicate::str::contains("Total effort: 34.0"));
}

#[test]
fn test_tree_shows_hierarchy_with_short_ids() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("● Flight Software  SUB@1  (38.0)"))
        .stdout(predicate::str::contains("├── ● Navigation  MOD@1  (30.0)"))
        .stdout(predicate::str::contains("│   ├── ● Kalman filter  TSK@1  10.0 x1.00"))
        .stdout(predicate::str::contains("└── ● Other  MOD@3  (0.0)"))
        .stdout(predicate::str::contains("● Ground Segment  SUB@2  (4.0)"))
        .stdout(predicate::str::contains("Total effort: 42.0"));
}

#[test]
fn test_chart_lists_enabled_subsystems() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subsystem effort distribution"))
        .stdout(predicate::str::contains("Flight Software  38.0"))
        .stdout(predicate::str::contains("Ground Segment  4.0"));
}

#[test]
fn test_chart_skips_disabled_subsystems_by_default() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["toggle", "SUB@2", "off"])
        .assert()
        .success();

    est()
        .current_dir(tmp.path())
        .args(["chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flight Software"))
        .stdout(predicate::str::contains("Ground Segment").not());

    est()
        .current_dir(tmp.path())
        .args(["chart", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ground Segment  0.0"));
}

#[test]
fn test_completions_generate() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("est"));
}
