// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error says what went wrong, why it might have happened and how
//! to fix it.

use ft_core::ValidationError;
use ft_storage::StoreError;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct FtError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FtError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for FtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for FtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl FtError {
    /// The data directory could not be opened or is locked.
    pub fn storage_unavailable(path: &Path, cause: &std::io::Error) -> Self {
        FtError::new(format!("Cannot open data at {}", path.display()))
            .with_context(cause.to_string())
            .with_context("Another ft command may be using the same data directory")
            .with_suggestion("Wait for the other command to finish and retry")
            .with_suggestion("Use a different location: ft --data-dir <PATH> ...")
    }

    /// Map a store failure to a displayable error.
    pub fn from_store(err: StoreError) -> Self {
        match &err {
            StoreError::StorageUnavailable { path, source } => {
                Self::storage_unavailable(path, source)
            }
            _ => FtError::new(format!("Storage failure: {}", err))
                .with_context("The last change was not saved")
                .with_source(err),
        }
    }

    /// Rejected user input.
    pub fn invalid_input(err: ValidationError) -> Self {
        FtError::new(err.to_string()).with_source(err)
    }

    /// A command needs the vehicle profile first.
    pub fn no_vehicle() -> Self {
        FtError::new("No vehicle configured")
            .with_suggestion("Set one up: ft vehicle set --model <MODEL> --capacity <LITERS>")
    }

    /// Destructive command run without confirmation.
    pub fn confirmation_required(command: &str) -> Self {
        FtError::new(format!("Refusing to {} without confirmation", command))
            .with_context("This removes the vehicle and every refuel")
            .with_suggestion("Re-run with --yes to confirm")
    }

    /// No usable data directory could be derived from the environment.
    pub fn no_data_dir() -> Self {
        FtError::new("Could not determine the data directory")
            .with_context("Neither FT_DATA_DIR, XDG_DATA_HOME nor HOME is set")
            .with_suggestion("Pass one explicitly: ft --data-dir <PATH> ...")
    }

    /// The config file exists but cannot be used.
    pub fn bad_config(path: &Path, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        FtError::new(format!("Invalid config file {}", path.display()))
            .with_context(cause.to_string())
            .with_suggestion("Fix or remove the file")
            .with_source(cause)
    }
}
