#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn trp() -> Command {
    cargo_bin_cmd!("timereport")
}

/// Create a unique settings file path inside the system temp dir and remove
/// any existing file
pub fn setup_settings_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timereport.conf", name));
    let settings = path.to_string_lossy().to_string();
    fs::remove_file(&settings).ok();
    settings
}

/// Write a minimal but complete settings file for tests
pub fn write_settings(path: &str) {
    let yaml = "\
api_key: secret-key
database_id: db-1
list_id: list-1
reporter_name: Ben Engelhard
";
    fs::write(path, yaml).unwrap();
}
