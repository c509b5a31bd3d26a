#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn paw() -> Command {
    cargo_bin_cmd!("pawlogger")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pawlogger.sqlite", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize an empty store
pub fn init_store(store_path: &str) {
    paw()
        .args(["--store", store_path, "--test", "init"])
        .assert()
        .success();
}

/// Subscribe to Pro via the mocked checkout (zero delay in test mode)
pub fn subscribe(store_path: &str) {
    paw()
        .args(["--store", store_path, "--test", "account", "--upgrade"])
        .assert()
        .success();
}

/// Add one event on a given date/time via the CLI
pub fn add_event(store_path: &str, kind: &str, date: &str, at: &str, accident: bool) {
    let mut args = vec![
        "--store", store_path, "--test", "add", kind, "--date", date, "--at", at,
    ];
    if accident {
        args.push("--accident");
    }
    paw().args(&args).assert().success();
}
