//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Sample effort table used across tests
///
/// Short ids after init, in tree order:
/// SUB@1 Flight Software (MOD@1 Navigation: TSK@1, TSK@2; MOD@2 Telemetry:
/// TSK@3; MOD@3 Other), SUB@2 Ground Segment (MOD@4 Dashboard: TSK@4;
/// MOD@5 Other). Total effort 42.0.
pub const SAMPLE_CSV: &str = "\
subsystem,module,task,effort,description
Flight Software,Navigation,Kalman filter,10,Sensor fusion
Flight Software,Navigation,Star tracker,20,Attitude fixes
Flight Software,Telemetry,Downlink framing,8,CCSDS frames
Ground Segment,Dashboard,Live plots,4,Operator view
";

/// Helper to get an est command
pub fn est() -> Command {
    Command::new(cargo::cargo_bin!("est"))
}

/// Write the sample CSV into a directory
pub fn write_sample_csv(tmp: &TempDir) -> PathBuf {
    let path = tmp.path().join("effort.csv");
    fs::write(&path, SAMPLE_CSV).unwrap();
    path
}

/// Helper to create an initialized project in a temp directory
pub fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_sample_csv(&tmp);
    est()
        .current_dir(tmp.path())
        .args(["init", "effort.csv"])
        .assert()
        .success();
    tmp
}
