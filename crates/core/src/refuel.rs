// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Refuel events

use crate::input::{check_positive, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate key of a refuel record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefuelId(pub u64);

impl fmt::Display for RefuelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One fuel purchase.
///
/// Immutable once stored; the only change a refuel ever sees is deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refuel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RefuelId>,
    pub date: DateTime<Utc>,
    pub liters: f64,
    /// Total amount paid, not the unit price
    pub price: f64,
    /// Cumulative distance reading at the pump
    pub odometer: u64,
}

impl Refuel {
    /// Build a refuel from user input, rejecting non-positive liters or price
    pub fn new(
        date: DateTime<Utc>,
        liters: f64,
        price: f64,
        odometer: u64,
    ) -> Result<Self, ValidationError> {
        check_positive(liters, ValidationError::InvalidLiters)?;
        check_positive(price, ValidationError::InvalidPrice)?;

        Ok(Self {
            id: None,
            date,
            liters,
            price,
            odometer,
        })
    }

    pub fn price_per_liter(&self) -> f64 {
        self.price / self.liters
    }
}

#[cfg(test)]
#[path = "refuel_tests.rs"]
mod tests;
