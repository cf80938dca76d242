// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration
//!
//! The data directory comes from `--data-dir`, then `FT_DATA_DIR`, then
//! `$XDG_DATA_HOME/ft`, then `~/.local/share/ft`. An optional
//! `config.toml` inside it sets display labels, the log filter and the
//! compaction threshold.

use crate::error::FtError;
use crate::output::Units;
use ft_storage::StoreConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    currency: String,
    distance_unit: String,
    log: String,
    compaction_threshold: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        let units = Units::default();
        Self {
            currency: units.currency,
            distance_unit: units.distance,
            log: "warn".to_string(),
            compaction_threshold: StoreConfig::DEFAULT_COMPACTION_THRESHOLD,
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub units: Units,
    /// Default tracing filter when `FT_LOG` is unset
    pub log: String,
    pub compaction_threshold: u64,
}

impl Config {
    /// Resolve the data directory and read its config file, if any
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self, FtError> {
        let data_dir = resolve_data_dir(data_dir, |key| std::env::var(key).ok())?;
        Self::from_dir(data_dir)
    }

    fn from_dir(data_dir: PathBuf) -> Result<Self, FtError> {
        let file = read_file_config(&data_dir.join(CONFIG_FILE))?;
        Ok(Self {
            data_dir,
            units: Units {
                currency: file.currency,
                distance: file.distance_unit,
            },
            log: file.log,
            compaction_threshold: file.compaction_threshold,
        })
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            data_dir: self.data_dir.clone(),
            compaction_threshold: self.compaction_threshold,
        }
    }
}

fn resolve_data_dir(
    explicit: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf, FtError> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = env("FT_DATA_DIR").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = env("XDG_DATA_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(xdg).join("ft"));
    }
    let home = env("HOME")
        .filter(|d| !d.is_empty())
        .ok_or_else(FtError::no_data_dir)?;
    Ok(PathBuf::from(home).join(".local/share/ft"))
}

fn read_file_config(path: &Path) -> Result<FileConfig, FtError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(e) => return Err(FtError::bad_config(path, e)),
    };
    toml::from_str(&content).map_err(|e| FtError::bad_config(path, e))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
