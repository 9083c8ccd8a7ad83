//! Error types for pipdeck operations.
//!
//! This module defines [`PipdeckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PipdeckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PipdeckError::Other`) for unexpected errors
//! - Per-package lookup failures never surface here; they degrade to
//!   "latest unknown" inside the aggregator

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pipdeck operations.
#[derive(Debug, Error)]
pub enum PipdeckError {
    /// The cache file exists but is not a valid cache document.
    #[error("Cache file {path} is corrupt ({message}); delete it to start fresh")]
    CacheCorrupt { path: PathBuf, message: String },

    /// The cache file could not be written.
    #[error("Failed to write cache file {path}: {message}")]
    CacheWrite { path: PathBuf, message: String },

    /// An external command could not be run to completion.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The installer's package listing was not in the expected format.
    #[error("Failed to read installed packages: {message}")]
    InstalledListParse { message: String },

    /// Menus need a terminal to draw on.
    #[error("pipdeck needs an interactive terminal")]
    NotInteractive,

    /// The user pressed Ctrl-C while a menu was open.
    #[error("Interrupted")]
    Interrupted,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pipdeck operations.
pub type Result<T> = std::result::Result<T, PipdeckError>;
