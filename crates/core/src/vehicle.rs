// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Vehicle profile
//!
//! Exactly zero or one vehicle exists at any time. The store assigns the
//! surrogate key on first save.

use crate::input::{check_positive, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate key of the vehicle record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub u64);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The tracked car's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VehicleId>,
    pub model: String,
    /// Tank capacity in liters
    pub capacity: f64,
}

impl Vehicle {
    /// Build a vehicle from user input.
    ///
    /// The model is trimmed and must not be empty; the capacity must be a
    /// positive finite number.
    pub fn new(model: impl Into<String>, capacity: f64) -> Result<Self, ValidationError> {
        let model = model.into().trim().to_string();
        if model.is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        check_positive(capacity, ValidationError::InvalidCapacity)?;

        Ok(Self {
            id: None,
            model,
            capacity,
        })
    }

    /// Same profile under a known key (overwrite in place on save)
    pub fn with_id(mut self, id: VehicleId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
#[path = "vehicle_tests.rs"]
mod tests;
