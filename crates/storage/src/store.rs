// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence store for the vehicle profile and the refuel log
//!
//! `Store` is an explicitly owned handle with an `init`/`close` lifecycle.
//! Every operation is a single async call; file I/O runs on the blocking
//! pool. A write is appended (and fsync'd) to the WAL before the in-memory
//! state changes, so a failed write leaves the store untouched.

use crate::operation::Operation;
use crate::state::MaterializedState;
use crate::wal::{Wal, WalError};
use fs2::FileExt;
use ft_core::{Refuel, RefuelId, Vehicle, VehicleId};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("store used before init()")]
    NotInitialized,
    #[error("no unused {0} keys left")]
    KeysExhausted(&'static str),
    #[error("WAL error: {0}")]
    Wal(#[from] WalError),
    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl StoreError {
    fn unavailable(path: &Path, source: impl Into<UnavailableSource>) -> Self {
        StoreError::StorageUnavailable {
            path: path.to_path_buf(),
            source: source.into().0,
        }
    }
}

struct UnavailableSource(io::Error);

impl From<io::Error> for UnavailableSource {
    fn from(e: io::Error) -> Self {
        Self(e)
    }
}

impl From<WalError> for UnavailableSource {
    fn from(e: WalError) -> Self {
        match e {
            WalError::Io(e) => Self(e),
            WalError::Json(e) => Self(io::Error::new(io::ErrorKind::InvalidData, e)),
        }
    }
}

/// Configuration for Store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the WAL and lock file
    pub data_dir: PathBuf,
    /// WAL entry count above which `init` compacts the log
    pub compaction_threshold: u64,
}

impl StoreConfig {
    pub const DEFAULT_COMPACTION_THRESHOLD: u64 = 1000;

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            compaction_threshold: Self::DEFAULT_COMPACTION_THRESHOLD,
        }
    }

    pub fn wal_path(&self) -> PathBuf {
        self.data_dir.join("wal.jsonl")
    }

    pub fn lock_path(&self) -> PathBuf {
        self.data_dir.join("ft.lock")
    }
}

/// Result of a compaction operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactionResult {
    pub entries_before: u64,
    pub entries_after: u64,
}

/// Handle to the durable store
pub struct Store {
    config: StoreConfig,
    inner: Arc<Mutex<Option<OpenStore>>>,
}

struct OpenStore {
    wal: Wal,
    state: MaterializedState,
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    #[allow(dead_code)]
    lock_file: File,
}

impl OpenStore {
    fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let dir = &config.data_dir;
        fs::create_dir_all(dir).map_err(|e| StoreError::unavailable(dir, e))?;

        let lock_path = config.lock_path();
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| StoreError::unavailable(&lock_path, e))?;
        lock_file
            .try_lock_exclusive()
            .map_err(|e| StoreError::unavailable(&lock_path, e))?;

        let wal_path = config.wal_path();
        let (wal, entries) =
            Wal::open(&wal_path).map_err(|e| StoreError::unavailable(&wal_path, e))?;

        let mut state = MaterializedState::default();
        for entry in &entries {
            state.apply(&entry.operation);
        }

        info!(
            path = %dir.display(),
            entries = entries.len(),
            refuels = state.refuels.len(),
            "store opened"
        );

        let mut store = Self {
            wal,
            state,
            lock_file,
        };

        let live = store.state.record_count() as u64;
        if store.wal.sequence() > config.compaction_threshold && store.wal.sequence() > live * 2 {
            store.compact()?;
        }

        Ok(store)
    }

    /// Log the operation, then apply it
    fn record(&mut self, op: Operation) -> Result<(), StoreError> {
        let sequence = self.wal.append(op.clone())?;
        debug!(sequence, ?op, "recorded");
        self.state.apply(&op);
        Ok(())
    }

    fn compact(&mut self) -> Result<CompactionResult, StoreError> {
        let entries_before = self.wal.sequence();
        self.wal.rewrite(self.state.to_operations())?;
        let result = CompactionResult {
            entries_before,
            entries_after: self.wal.sequence(),
        };
        info!(
            before = result.entries_before,
            after = result.entries_after,
            "WAL compacted"
        );
        Ok(result)
    }
}

impl Store {
    /// Create an unopened store; call `init` before anything else
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            inner: Arc::new(Mutex::new(None)),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Open the data directory, take the lock and replay the log.
    ///
    /// Calling `init` on an already open store does nothing.
    pub async fn init(&self) -> Result<(), StoreError> {
        let config = self.config.clone();
        let inner = Arc::clone(&self.inner);

        tokio::task::spawn_blocking(move || {
            let mut guard = inner.lock().unwrap_or_else(|e| e.into_inner());
            if guard.is_none() {
                *guard = Some(OpenStore::open(&config)?);
            }
            Ok::<_, StoreError>(())
        })
        .await?
    }

    /// Release the log and the lock; the store can be `init`ed again later
    pub async fn close(&self) -> Result<(), StoreError> {
        let inner = Arc::clone(&self.inner);

        tokio::task::spawn_blocking(move || {
            let mut guard = inner.lock().unwrap_or_else(|e| e.into_inner());
            if guard.take().is_some() {
                debug!("store closed");
            }
        })
        .await?;
        Ok(())
    }

    /// Create or replace the vehicle.
    ///
    /// Without an id the vehicle gets a fresh key; with one it is stored
    /// under that key. Either way it becomes the only vehicle.
    pub async fn save_vehicle(&self, vehicle: Vehicle) -> Result<VehicleId, StoreError> {
        self.write(move |store| {
            let id = match vehicle.id {
                Some(id) => id,
                None => store
                    .state
                    .next_vehicle_id()
                    .ok_or(StoreError::KeysExhausted("vehicle"))?,
            };
            store.record(Operation::VehicleSave {
                id,
                model: vehicle.model,
                capacity: vehicle.capacity,
            })?;
            Ok(id)
        })
        .await
    }

    /// The stored vehicle, if one has been saved
    pub async fn get_vehicle(&self) -> Result<Option<Vehicle>, StoreError> {
        self.read(|state| state.vehicle.clone()).await
    }

    /// Insert a refuel under a fresh key; any id on the input is ignored
    pub async fn add_refuel(&self, refuel: Refuel) -> Result<RefuelId, StoreError> {
        self.write(move |store| {
            let id = store
                .state
                .next_refuel_id()
                .ok_or(StoreError::KeysExhausted("refuel"))?;
            store.record(Operation::RefuelAdd {
                id,
                date: refuel.date,
                liters: refuel.liters,
                price: refuel.price,
                odometer: refuel.odometer,
            })?;
            Ok(id)
        })
        .await
    }

    /// Every refuel, newest date first
    pub async fn get_all_refuels(&self) -> Result<Vec<Refuel>, StoreError> {
        self.read(MaterializedState::refuels_by_date).await
    }

    /// Remove a refuel; unknown ids are ignored
    pub async fn delete_refuel(&self, id: RefuelId) -> Result<(), StoreError> {
        self.write(move |store| {
            if store.state.refuels.contains_key(&id) {
                store.record(Operation::RefuelDelete { id })?;
            } else {
                debug!(%id, "delete of unknown refuel ignored");
            }
            Ok(())
        })
        .await
    }

    /// Remove the vehicle and every refuel as a single logged operation
    pub async fn clear_all_data(&self) -> Result<(), StoreError> {
        self.write(|store| store.record(Operation::ClearAll)).await
    }

    /// Rewrite the log as the minimal set of operations for the current state
    pub async fn compact(&self) -> Result<CompactionResult, StoreError> {
        self.write(OpenStore::compact).await
    }

    /// Writers hold the lock across fsync; wait for it on the blocking pool
    async fn read<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&MaterializedState) -> T + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);

        tokio::task::spawn_blocking(move || {
            let guard = inner.lock().unwrap_or_else(|e| e.into_inner());
            let store = guard.as_ref().ok_or(StoreError::NotInitialized)?;
            Ok::<_, StoreError>(f(&store.state))
        })
        .await?
    }

    async fn write<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut OpenStore) -> Result<T, StoreError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);

        tokio::task::spawn_blocking(move || {
            let mut guard = inner.lock().unwrap_or_else(|e| e.into_inner());
            let store = guard.as_mut().ok_or(StoreError::NotInitialized)?;
            f(store)
        })
        .await?
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
