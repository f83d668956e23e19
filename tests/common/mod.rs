//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a fabrika command
pub fn fabrika() -> Command {
    Command::new(cargo::cargo_bin!("fabrika"))
}

/// Temp dir plus the save-file path commands should point at
pub fn setup_floor() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let save = tmp.path().join("factory.json");
    (tmp, save)
}

/// Place one chair order for Ivan through the binary
pub fn place_chair_order(save: &std::path::Path) {
    fabrika()
        .args([
            "order",
            "--customer",
            "Ivan Melnikov",
            "--phone",
            "555-0100",
            "--item",
            "chair",
            "-f",
        ])
        .arg(save)
        .assert()
        .success();
}
