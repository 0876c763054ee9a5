#![allow(dead_code)]
use std::env;
use std::fs;
use std::path::PathBuf;

/// Unique database path inside the system temp dir, with leftovers removed.
pub fn setup_test_db(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("discord_shift_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&dir).ok();
    dir.join("shifts.db")
}

pub fn cleanup_test_db(path: &PathBuf) {
    if let Some(dir) = path.parent() {
        fs::remove_dir_all(dir).ok();
    }
}
