// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input boundary checks
//!
//! Records are validated here, where they are constructed from user input.
//! The store and the statistics engine trust what they are given.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("vehicle model must not be empty")]
    EmptyModel,
    #[error("tank capacity must be a positive number, got {0}")]
    InvalidCapacity(f64),
    #[error("liters must be a positive number, got {0}")]
    InvalidLiters(f64),
    #[error("price must be a positive number, got {0}")]
    InvalidPrice(f64),
    #[error("invalid date '{0}': expected YYYY-MM-DD or RFC 3339")]
    InvalidDate(String),
}

pub(crate) fn check_positive(
    value: f64,
    err: fn(f64) -> ValidationError,
) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

/// Parse a refuel date.
///
/// A bare calendar date (`2025-01-15`) means midnight UTC on that day.
/// Full RFC 3339 timestamps are converted to UTC.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, ValidationError> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
