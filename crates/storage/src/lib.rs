// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ft-storage: durable local storage for the ft fuel tracker
//!
//! ```text
//! Store::save_vehicle / add_refuel / ...
//!        ↓
//! Operation → WalEntry → Wal::append → disk (wal.jsonl, fsync)
//!        ↓
//! MaterializedState::apply → get_vehicle / get_all_refuels
//! ```
//!
//! The log is the source of truth; in-memory state is rebuilt from it on
//! `Store::init`.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod entry;
pub mod operation;
pub mod state;
pub mod store;
pub mod wal;

pub use entry::WalEntry;
pub use operation::Operation;
pub use state::MaterializedState;
pub use store::{CompactionResult, Store, StoreConfig, StoreError};
pub use wal::{Replay, Wal, WalError};
