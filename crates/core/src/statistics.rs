// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statistics engine
//!
//! Pure derivation of summary figures from a refuel log. Nothing here is
//! persisted; statistics are recomputed from scratch on every read.
//!
//! Distance and consumption use the extremes of the odometer range across
//! the whole log, not a chronological path. Records that arrive out of
//! order still contribute their full range, and there is no per-interval
//! consumption or outlier rejection.

use crate::refuel::Refuel;
use serde::{Deserialize, Serialize};

/// Summary figures over a refuel log
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Liters per 100 distance units
    pub average_consumption: f64,
    pub total_liters: f64,
    pub total_cost: f64,
    pub average_price_per_liter: f64,
    pub total_distance: u64,
}

impl Statistics {
    /// Derive statistics from refuels in any order.
    ///
    /// Total over any input that respects the positivity invariants:
    /// an empty log yields all zeros, a single refuel yields no distance.
    pub fn from_refuels(refuels: &[Refuel]) -> Self {
        if refuels.is_empty() {
            return Self::default();
        }

        let total_liters: f64 = refuels.iter().map(|r| r.liters).sum();
        let total_cost: f64 = refuels.iter().map(|r| r.price).sum();
        let average_price_per_liter = total_cost / total_liters;

        let total_distance = odometer_span(refuels);
        let average_consumption = if total_distance > 0 {
            total_liters / total_distance as f64 * 100.0
        } else {
            0.0
        };

        Self {
            average_consumption,
            total_liters,
            total_cost,
            average_price_per_liter,
            total_distance,
        }
    }
}

/// Distance between the lowest and highest odometer readings
fn odometer_span(refuels: &[Refuel]) -> u64 {
    if refuels.len() < 2 {
        return 0;
    }

    let mut readings: Vec<u64> = refuels.iter().map(|r| r.odometer).collect();
    readings.sort_unstable();

    match (readings.first(), readings.last()) {
        (Some(first), Some(last)) => last - first,
        _ => 0,
    }
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod tests;
