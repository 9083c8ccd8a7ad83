//! Cache storage implementation.

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::error::{PipdeckError, Result};

use super::entry::RegistryInfo;

type Entries = BTreeMap<String, RegistryInfo>;

/// Write-through store of registry metadata keyed by package name.
///
/// The whole mapping is read once by [`CacheStore::load`] and rewritten on
/// every [`CacheStore::set`]. The write lock is held across the file rewrite,
/// so concurrent writers from the aggregator's workers are serialized.
#[derive(Debug)]
pub struct CacheStore {
    path: PathBuf,
    ttl: Duration,
    entries: RwLock<Entries>,
}

impl CacheStore {
    /// Load the cache at `path`.
    ///
    /// A missing file yields an empty cache. A file that exists but does not
    /// parse is reported as [`PipdeckError::CacheCorrupt`].
    pub fn load(path: impl Into<PathBuf>, ttl: Duration) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str::<Entries>(&json).map_err(|e| PipdeckError::CacheCorrupt {
                path: path.clone(),
                message: e.to_string(),
            })?
        } else {
            Entries::new()
        };

        tracing::debug!("Loaded {} cache entries from {:?}", entries.len(), path);

        Ok(Self {
            path,
            ttl,
            entries: RwLock::new(entries),
        })
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the time-to-live applied by [`CacheStore::get`].
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a fresh entry for `name`.
    pub fn get(&self, name: &str) -> Option<RegistryInfo> {
        self.get_at(name, Utc::now())
    }

    /// Get the entry for `name` if it is still fresh at `now`.
    ///
    /// Expired entries stay on disk until overwritten; they only read as absent.
    pub fn get_at(&self, name: &str, now: DateTime<Utc>) -> Option<RegistryInfo> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(name)
            .filter(|info| info.is_fresh_at(now, self.ttl))
            .cloned()
    }

    /// Store `info` for `name`, stamped with the current time.
    pub fn set(&self, name: &str, info: RegistryInfo) -> Result<()> {
        self.set_at(name, info, Utc::now())
    }

    /// Store `info` for `name` stamped with `now`, then rewrite the cache file.
    pub fn set_at(&self, name: &str, info: RegistryInfo, now: DateTime<Utc>) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(name.to_string(), info.with_fetched_at(now));
        self.persist(&entries)
    }

    /// Rewrite the whole file. Callers hold the write lock.
    fn persist(&self, entries: &Entries) -> Result<()> {
        let write_err = |message: String| PipdeckError::CacheWrite {
            path: self.path.clone(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| write_err(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| write_err(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| write_err(e.to_string()))?;

        tracing::debug!("Wrote {} cache entries to {:?}", entries.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn info(versions: &[&str]) -> RegistryInfo {
        RegistryInfo::from_versions(versions.iter().map(|v| v.to_string()).collect()).unwrap()
    }

    fn store_in(temp: &TempDir) -> CacheStore {
        CacheStore::load(temp.path().join("package_cache.json"), Duration::hours(1)).unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert!(store.is_empty());
        assert!(store.get("foo").is_none());
    }

    #[test]
    fn set_then_get_returns_entry() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.set("foo", info(&["2.0", "1.9"])).unwrap();

        let cached = store.get("foo").unwrap();
        assert_eq!(cached.latest_version, "2.0");
        assert_eq!(cached.all_versions, vec!["2.0", "1.9"]);
    }

    #[test]
    fn entry_expires_after_ttl() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let t0 = Utc::now();

        store.set_at("foo", info(&["2.0", "1.9"]), t0).unwrap();

        assert!(store.get_at("foo", t0 + Duration::minutes(30)).is_some());
        assert!(store.get_at("foo", t0 + Duration::minutes(90)).is_none());
    }

    #[test]
    fn expired_entries_are_kept_until_overwritten() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let t0 = Utc::now() - Duration::hours(3);

        store.set_at("foo", info(&["1.0"]), t0).unwrap();

        assert!(store.get("foo").is_none());
        assert_eq!(store.len(), 1);

        store.set("foo", info(&["1.1", "1.0"])).unwrap();
        assert_eq!(store.get("foo").unwrap().latest_version, "1.1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_restamps_fetch_time() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let stale = info(&["1.0"]).with_fetched_at(Utc::now() - Duration::days(2));

        store.set("foo", stale).unwrap();

        assert!(store.get("foo").is_some());
    }

    #[test]
    fn get_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.set("foo", info(&["2.0"])).unwrap();

        assert_eq!(store.get("foo"), store.get("foo"));
        assert_eq!(store.get("bar"), store.get("bar"));
    }

    #[test]
    fn reload_round_trips_entries() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package_cache.json");

        let store = CacheStore::load(&path, Duration::hours(1)).unwrap();
        store.set("foo", info(&["2.0", "1.9"])).unwrap();

        let reloaded = CacheStore::load(&path, Duration::hours(1)).unwrap();
        let cached = reloaded.get("foo").unwrap();
        assert_eq!(cached.latest_version, "2.0");
        assert_eq!(cached.all_versions, vec!["2.0", "1.9"]);
    }

    #[test]
    fn file_uses_documented_field_names() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.set("foo", info(&["2.0"])).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(json["foo"]["latest_version"], "2.0");
        assert_eq!(json["foo"]["all_versions"][0], "2.0");
        assert!(json["foo"]["timestamp"].is_string());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package_cache.json");
        fs::write(&path, "{ not json").unwrap();

        let err = CacheStore::load(&path, Duration::hours(1)).unwrap_err();
        assert!(matches!(err, PipdeckError::CacheCorrupt { .. }));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package_cache.json");
        fs::write(&path, r#"{"foo": {"latest_version": 3}}"#).unwrap();

        let err = CacheStore::load(&path, Duration::hours(1)).unwrap_err();
        assert!(matches!(err, PipdeckError::CacheCorrupt { .. }));
    }

    #[test]
    fn creates_parent_directories_on_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("cache.json");
        let store = CacheStore::load(&path, Duration::hours(1)).unwrap();

        store.set("foo", info(&["1.0"])).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn concurrent_writers_leave_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package_cache.json");
        let store = Arc::new(CacheStore::load(&path, Duration::hours(1)).unwrap());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store
                        .set(&format!("pkg{}", i), info(&[&format!("{}.0", i)]))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let reloaded = CacheStore::load(&path, Duration::hours(1)).unwrap();
        assert_eq!(reloaded.len(), 16);
        assert_eq!(reloaded.get("pkg7").unwrap().latest_version, "7.0");
    }
}
