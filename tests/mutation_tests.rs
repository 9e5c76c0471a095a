//! Toggle, ratio, and manual-override flows through the binary

mod common;

use common::{est, setup_project};
use predicates::prelude::*;

#[test]
fn test_toggle_module_off_and_on() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["toggle", "MOD@1", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disabled MOD@1 Navigation"))
        .stdout(predicate::str::contains("Scope effort: 0.0"))
        .stdout(predicate::str::contains("Total effort: 12.0"));

    est()
        .current_dir(tmp.path())
        .args(["toggle", "MOD@1", "on"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total effort: 42.0"));
}

#[test]
fn test_toggle_subsystem_cascades_down() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["toggle", "SUB@1", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total effort: 4.0"));

    // The cascade reached the tasks: everything under SUB@1 shows excluded.
    est()
        .current_dir(tmp.path())
        .args(["tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○ Kalman filter  TSK@1  10.0 x0.00"))
        .stdout(predicate::str::contains("○ Navigation  MOD@1  (0.0)"));
}

#[test]
fn test_ratio_accepts_percent_shorthand() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["ratio", "TSK@2", "50%"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set TSK@2 Star tracker to x0.50"))
        .stdout(predicate::str::contains("Effective effort: 10.0"))
        .stdout(predicate::str::contains("Total effort: 32.0"));
}

#[test]
fn test_zeroing_every_task_derives_module_disable() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["ratio", "TSK@1", "0"])
        .assert()
        .success();
    est()
        .current_dir(tmp.path())
        .args(["ratio", "TSK@2", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total effort: 12.0"));

    est()
        .current_dir(tmp.path())
        .args(["tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○ Navigation  MOD@1  (0.0)"))
        .stdout(predicate::str::contains("● Telemetry  MOD@2  (8.0)"));
}

#[test]
fn test_enabling_a_task_enables_its_ancestors() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["toggle", "SUB@1", "off"])
        .assert()
        .success();

    est()
        .current_dir(tmp.path())
        .args(["toggle", "TSK@1", "on"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total effort: 14.0"));

    // Module and subsystem came back on; sibling tasks stayed excluded.
    est()
        .current_dir(tmp.path())
        .args(["tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("● Flight Software"))
        .stdout(predicate::str::contains("● Navigation  MOD@1  (10.0)"))
        .stdout(predicate::str::contains("○ Star tracker  TSK@2  20.0 x0.00"));
}

#[test]
fn test_other_sets_manual_effort() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["other", "SUB@2", "--effort", "5", "--comment", "ops buffer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subsystem effort: 9.0"))
        .stdout(predicate::str::contains("Total effort: 47.0"));

    est()
        .current_dir(tmp.path())
        .args(["tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Other  MOD@5  (5.0)  [ops buffer]"));
}

#[test]
fn test_other_rejects_overlong_comment() {
    let tmp = setup_project();
    let long_comment = "x".repeat(51);

    est()
        .current_dir(tmp.path())
        .args(["other", "SUB@1", "--effort", "1", "--comment", &long_comment])
        .assert()
        .failure()
        .stderr(predicate::str::contains("50"));
}

#[test]
fn test_other_requires_a_subsystem_id() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["other", "MOD@1", "--effort", "1", "--comment", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a subsystem id"));
}

#[test]
fn test_out_of_range_ratio_rejected_and_state_untouched() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["ratio", "TSK@1", "150%"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inclusion ratio"));

    est()
        .current_dir(tmp.path())
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total effort: 42.0"));
}

#[test]
fn test_unknown_short_id_rejected() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["toggle", "TSK@99", "off"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown short id"));
}

#[test]
fn test_ratio_refuses_non_task_nodes() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["ratio", "MOD@1", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a task id"));
}

#[test]
fn test_state_persists_across_invocations() {
    let tmp = setup_project();

    est()
        .current_dir(tmp.path())
        .args(["ratio", "TSK@2", "0.25"])
        .assert()
        .success();

    est()
        .current_dir(tmp.path())
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total effort: 27.0"));
}
