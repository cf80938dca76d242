// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod dashboard;
pub mod maintenance;
pub mod refuel;
pub mod stats;
pub mod vehicle;

use crate::error::FtError;
use crate::output::{OutputFormat, Units};
use ft_core::Vehicle;
use ft_storage::Store;

/// What every command gets: an open store and how to present results
pub struct Context {
    pub store: Store,
    pub format: OutputFormat,
    pub units: Units,
}

impl Context {
    /// The vehicle profile, or the setup hint when there is none
    pub async fn require_vehicle(&self) -> anyhow::Result<Vehicle> {
        let vehicle = self
            .store
            .get_vehicle()
            .await
            .map_err(FtError::from_store)?;
        Ok(vehicle.ok_or_else(FtError::no_vehicle)?)
    }
}
