// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ft-core: Core library for the ft fuel tracker
//!
//! This crate provides:
//! - The vehicle and refuel data model
//! - Input-boundary validation for user-supplied records
//! - The statistics engine (consumption, price, totals)
//! - A clock abstraction for testable "today" defaults

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod clock;
pub mod input;
pub mod refuel;
pub mod statistics;
pub mod vehicle;

pub use clock::{Clock, FakeClock, SystemClock};
pub use input::{parse_date, ValidationError};
pub use refuel::{Refuel, RefuelId};
pub use statistics::Statistics;
pub use vehicle::{Vehicle, VehicleId};
