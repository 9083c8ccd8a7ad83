//! Cached registry metadata.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Registry metadata for one package, as last fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryInfo {
    /// Newest version according to the registry tool's ordering.
    pub latest_version: String,
    /// Every published version, newest first.
    pub all_versions: Vec<String>,
    /// When this entry was fetched.
    #[serde(rename = "timestamp")]
    pub fetched_at: DateTime<Utc>,
}

impl RegistryInfo {
    /// Build an entry from a version list whose first element is the newest.
    ///
    /// Returns `None` for an empty list, since there is no latest version.
    pub fn from_versions(versions: Vec<String>) -> Option<Self> {
        let latest_version = versions.first()?.clone();
        Some(Self {
            latest_version,
            all_versions: versions,
            fetched_at: Utc::now(),
        })
    }

    /// Set the fetch time.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Get the age of this entry at `now`.
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.fetched_at)
    }

    /// Whether the entry is still valid at `now` for the given TTL.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age_at(now) < ttl
    }
}
