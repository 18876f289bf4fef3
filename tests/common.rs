#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use duonotes::models::Record;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with HOME pointed at a throwaway directory, so no real
/// configuration file is read or written.
pub fn app() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("duonotes_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("duonotes");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique, empty workbook directory inside the system temp dir
pub fn setup_test_workbook(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_duonotes_wb", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `init` in test mode against the given workbook
pub fn init_workbook(wb: &str) {
    app()
        .args(["--workbook", wb, "--test", "init"])
        .assert()
        .success();
}

pub fn note(name: &str, message: &str, ts: &str) -> Record {
    Record::from_pairs([("Name", name), ("Message", message), ("Timestamp", ts)])
}

pub fn event(date: &str, title: &str, completed: &str) -> Record {
    Record::from_pairs([
        ("Date", date),
        ("Title", title),
        ("Created", "2025-01-01 09:00:00"),
        ("Completed", completed),
    ])
}
