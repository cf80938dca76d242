// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operations recorded in the write-ahead log
//!
//! Surrogate keys are chosen before an operation is logged, so replaying
//! the log always rebuilds the same records under the same keys.

use chrono::{DateTime, Utc};
use ft_core::{RefuelId, VehicleId};
use serde::{Deserialize, Serialize};

/// All state-changing operations in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    /// Create or replace the vehicle singleton
    VehicleSave {
        id: VehicleId,
        model: String,
        capacity: f64,
    },

    /// Insert a refuel event
    RefuelAdd {
        id: RefuelId,
        date: DateTime<Utc>,
        liters: f64,
        price: f64,
        odometer: u64,
    },

    /// Remove a refuel event
    RefuelDelete { id: RefuelId },

    /// Remove the vehicle and every refuel in one step
    ClearAll,

    /// Highest keys handed out so far, written by compaction
    Counters { last_vehicle_id: u64, last_refuel_id: u64 },
}

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;
