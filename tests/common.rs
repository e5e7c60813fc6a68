#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Build a command with its config/preference home redirected to an
/// isolated per-test directory.
pub fn otl(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("otlogger");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Create a unique, empty home directory for one test
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_otlogger_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_otlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(home: &str, db_path: &str) {
    otl(home)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // Two sessions for one technician, one for another. The second
    // "Alex Haro" session starts earlier than the first on purpose so
    // export-sort tests have something to reorder.
    otl(home)
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "Alex Haro",
            "--start",
            "2025-09-01T08:00",
            "--end",
            "2025-09-01T10:00",
            "--desc",
            "server maintenance",
        ])
        .assert()
        .success();

    otl(home)
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "Alex Haro",
            "--start",
            "2025-09-01T06:00",
            "--end",
            "2025-09-01T07:30",
        ])
        .assert()
        .success();

    otl(home)
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "Carlos Cisneros",
            "--start",
            "2025-09-15T18:00",
            "--end",
            "2025-09-15T19:00",
            "--desc",
            "network outage",
        ])
        .assert()
        .success();
}
