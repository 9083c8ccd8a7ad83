//! Runtime settings.
//!
//! [`Settings`] is resolved once from the parsed [`Cli`] and handed to each
//! component explicitly. Anything the user did not override falls back to a
//! platform default.

use std::path::PathBuf;

use crate::aggregator::DEFAULT_WORKERS;
use crate::cache::{default_cache_path, DEFAULT_TTL_SECS};
use crate::cli::Cli;
use crate::shell::default_python;

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "package_manager.log";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Interpreter used for every pip invocation.
    pub python: PathBuf,
    pub cache_path: PathBuf,
    pub log_path: PathBuf,
    /// Worker pool size, at least 1.
    pub workers: usize,
    pub cache_ttl: chrono::Duration,
    pub no_color: bool,
    pub debug: bool,
}

impl Settings {
    /// Resolve settings from command-line flags and their environment fallbacks.
    pub fn from_cli(cli: &Cli) -> Self {
        let ttl_secs = cli.cache_ttl.unwrap_or(DEFAULT_TTL_SECS);
        let cache_ttl = i64::try_from(ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX);

        Self {
            python: cli
                .python
                .clone()
                .unwrap_or_else(|| PathBuf::from(default_python())),
            cache_path: cli.cache_file.clone().unwrap_or_else(default_cache_path),
            log_path: cli.log_file.clone().unwrap_or_else(default_log_path),
            workers: cli.workers.unwrap_or(DEFAULT_WORKERS).max(1),
            cache_ttl,
            no_color: cli.no_color,
            debug: cli.debug,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_cli(&Cli::default())
    }
}

/// Get the default log file path.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pipdeck")
        .join(LOG_FILE_NAME)
}
