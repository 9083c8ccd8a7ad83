//! Registry metadata cache.
//!
//! This module provides a single-file JSON cache of per-package registry
//! metadata with TTL-based freshness. Expired entries are never deleted; they
//! read as absent until the next successful lookup overwrites them.

pub mod entry;
pub mod store;

pub use entry::RegistryInfo;
pub use store::CacheStore;

/// Default time-to-live for cache entries, in seconds (1 hour).
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Cache file name inside the cache directory.
pub const CACHE_FILE_NAME: &str = "package_cache.json";

/// Get the default cache file path.
pub fn default_cache_path() -> std::path::PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("pipdeck")
        .join(CACHE_FILE_NAME)
}
