//! Shared helpers for CLI specs.

#![allow(dead_code)]

pub use assert_cmd::Command;
pub use predicates::prelude::*;

use std::path::Path;
use tempfile::TempDir;

/// A throwaway data directory and an `ft` bound to it
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// No vehicle, no refuels, no log file yet
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A project with the default test vehicle configured
    pub fn with_vehicle() -> Self {
        let project = Self::empty();
        project
            .ft()
            .args(["vehicle", "set", "--model", "Renault Clio", "--capacity", "50"])
            .assert()
            .success();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `ft --data-dir <tmp>` with a clean environment
    pub fn ft(&self) -> Command {
        let mut cmd = Command::cargo_bin("ft").expect("ft binary should be built");
        cmd.env_remove("FT_DATA_DIR")
            .env_remove("FT_LOG")
            .arg("--data-dir")
            .arg(self.path());
        cmd
    }

    /// Run with `--format json` and parse stdout
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .ft()
            .args(args)
            .args(["--format", "json"])
            .output()
            .expect("ft should run");
        assert!(
            output.status.success(),
            "ft {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
    }

    /// Record a refuel, asserting success
    pub fn refuel(&self, date: &str, liters: &str, price: &str, odometer: &str) {
        self.ft()
            .args([
                "refuel", "add", "--date", date, "--liters", liters, "--price", price,
                "--odometer", odometer,
            ])
            .assert()
            .success();
    }

    /// Write a file relative to the data directory
    pub fn file(&self, path: &str, content: &str) {
        let full = self.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(full, content).expect("Failed to write file");
    }

    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).unwrap_or_default()
    }
}
