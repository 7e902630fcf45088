#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rtimetracker::core::store::EntryStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtt() -> Command {
    cargo_bin_cmd!("rtimetracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// A config path that never exists, so the binary runs on defaults
pub fn no_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_missing_rtimetracker.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run the interactive binary on a fresh DB, feeding `input` on stdin
pub fn run_session(db_path: &str, name: &str, input: &str) -> assert_cmd::assert::Assert {
    rtt()
        .args(["--db", db_path, "--config", &no_config(name)])
        .write_stdin(input.to_string())
        .assert()
}

/// Fresh store on a unique temp file
pub fn open_store(name: &str) -> EntryStore {
    let db_path = setup_test_db(name);
    EntryStore::open(&db_path).expect("open store")
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}
