// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write-ahead log for durable storage
//!
//! One JSON entry per line. Every append is fsync'd before it returns, so
//! an operation that reported success survives a crash. A crash in the
//! middle of an append leaves a partial last line; replay stops there and
//! `open` cuts it off so later appends start on a clean line.

use crate::entry::WalEntry;
use crate::operation::Operation;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in WAL operations
#[derive(Debug, Error)]
pub enum WalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Valid prefix of a WAL file
#[derive(Debug, Default)]
pub struct Replay {
    pub entries: Vec<WalEntry>,
    /// Byte length of the valid prefix
    pub valid_len: u64,
    /// Whether anything after the valid prefix was discarded
    pub corrupted: bool,
}

/// Write-ahead log for durable operation storage
pub struct Wal {
    path: PathBuf,
    file: File,
    next_sequence: u64,
}

impl Wal {
    /// Open or create a WAL at the given path.
    ///
    /// Returns the writer together with the valid entries already on disk.
    /// A corrupt tail is truncated; the caller must hold exclusive access.
    pub fn open(path: &Path) -> Result<(Self, Vec<WalEntry>), WalError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let replay = Self::replay(path)?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        if replay.corrupted {
            tracing::warn!(
                path = %path.display(),
                valid_len = replay.valid_len,
                "WAL has a corrupt tail, truncating at last valid entry"
            );
            file.set_len(replay.valid_len)?;
            file.sync_all()?;
        }

        let next_sequence = replay
            .entries
            .last()
            .map(|entry| entry.sequence + 1)
            .unwrap_or(0);

        let wal = Self {
            path: path.to_path_buf(),
            file,
            next_sequence,
        };
        Ok((wal, replay.entries))
    }

    /// Append an operation to the log.
    ///
    /// Returns the assigned sequence number once the entry is on disk.
    pub fn append(&mut self, operation: Operation) -> Result<u64, WalError> {
        let sequence = self.next_sequence;
        let line = WalEntry::new(sequence, operation).to_line()?;

        self.file.write_all(line.as_bytes())?;
        self.file.sync_all()?;

        self.next_sequence += 1;
        Ok(sequence)
    }

    /// Replace the whole log with the given operations.
    ///
    /// The new log is written next to the old one and renamed over it, so a
    /// crash leaves either the old log or the new one, never a mix. On
    /// error the writer keeps appending to the old log.
    pub fn rewrite(&mut self, operations: Vec<Operation>) -> Result<(), WalError> {
        let tmp_path = self.path.with_extension("jsonl.tmp");
        let count = operations.len() as u64;

        let renamed = Self::write_fresh(&tmp_path, operations).and_then(|file| {
            fs::rename(&tmp_path, &self.path)?;
            Ok(file)
        });
        let file = match renamed {
            Ok(file) => file,
            Err(e) => {
                // Best effort; the original error is reported
                let _ = fs::remove_file(&tmp_path);
                return Err(e);
            }
        };

        // The handle follows the renamed inode, so appends land in the new log
        self.file = file;
        self.next_sequence = count;

        sync_parent_dir(&self.path)?;
        Ok(())
    }

    /// Write operations to a new file at `path` and return it open for append
    fn write_fresh(path: &Path, operations: Vec<Operation>) -> Result<File, WalError> {
        // Leftover from a rewrite interrupted by a crash
        match fs::remove_file(path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }

        let mut file = OpenOptions::new()
            .create_new(true)
            .append(true)
            .open(path)?;
        for (sequence, operation) in operations.into_iter().enumerate() {
            let line = WalEntry::new(sequence as u64, operation).to_line()?;
            file.write_all(line.as_bytes())?;
        }
        file.sync_all()?;
        Ok(file)
    }

    /// Get the next sequence number to be assigned
    pub fn sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Get the path to the WAL file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the valid prefix of a WAL file without opening it for writing.
    ///
    /// A missing file is an empty log. Reading stops at the first line that
    /// is incomplete, unparseable or fails its checksum.
    pub fn replay(path: &Path) -> Result<Replay, WalError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Replay::default()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = BufReader::new(file);
        let mut replay = Replay::default();
        let mut line = String::new();

        loop {
            line.clear();
            let read = match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(n) => n as u64,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    replay.corrupted = true;
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            // No trailing newline means the append never finished
            if !line.ends_with('\n') {
                replay.corrupted = true;
                break;
            }

            let content = line.trim_end();
            if !content.is_empty() {
                match WalEntry::from_line(content) {
                    Ok(entry) if entry.verify() => replay.entries.push(entry),
                    Ok(entry) => {
                        tracing::warn!(sequence = entry.sequence, "WAL checksum mismatch");
                        replay.corrupted = true;
                        break;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "unreadable WAL entry");
                        replay.corrupted = true;
                        break;
                    }
                }
            }

            replay.valid_len += read;
        }

        Ok(replay)
    }
}

/// Make a rename inside the WAL's directory durable
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => File::open(dir)?.sync_all(),
        _ => Ok(()),
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "wal_tests.rs"]
mod tests;
