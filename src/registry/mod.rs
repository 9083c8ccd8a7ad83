//! Package registry lookups.
//!
//! A [`VersionSource`] answers "which versions of this package exist?" with a
//! newest-first list. The production source is [`PipIndex`]; tests substitute
//! their own implementations.

pub mod pip;

pub use pip::{parse_available_versions, PipIndex};

use crate::error::Result;

/// Source of published versions for a package.
///
/// Implementations are shared across the aggregator's worker threads.
pub trait VersionSource: Send + Sync {
    /// Fetch every published version of `name`, newest first.
    ///
    /// `Ok(None)` means the registry has no data for the package (an unknown
    /// package is a normal outcome). `Err` means the lookup itself could not run.
    fn fetch_versions(&self, name: &str) -> Result<Option<Vec<String>>>;
}
