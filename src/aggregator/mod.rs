//! Registry metadata aggregation.
//!
//! [`InfoAggregator::enrich`] resolves the latest version of every installed
//! package, cache first, with a bounded pool of worker threads for the live
//! lookups. Results come back in input order and a failed lookup only turns
//! that package's latest version into "unknown".

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use crate::cache::{CacheStore, RegistryInfo};
use crate::packages::InstalledPackage;
use crate::registry::VersionSource;

/// Default number of concurrent registry lookups.
pub const DEFAULT_WORKERS: usize = 20;

/// An installed package together with its latest known version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageStatus {
    /// Package name.
    pub name: String,
    /// Installed version.
    pub installed_version: String,
    /// Latest registry version, `None` when unknown.
    pub latest_version: Option<String>,
}

impl PackageStatus {
    /// Status for a package whose latest version could not be determined.
    pub fn unknown(package: &InstalledPackage) -> Self {
        Self {
            name: package.name.clone(),
            installed_version: package.installed_version.clone(),
            latest_version: None,
        }
    }

    /// Whether the registry's latest version differs from the installed one.
    pub fn has_update(&self) -> bool {
        self.latest_version
            .as_deref()
            .is_some_and(|latest| latest != self.installed_version)
    }
}

/// Combines the cache and a version source into per-package statuses.
pub struct InfoAggregator {
    cache: Arc<CacheStore>,
    source: Arc<dyn VersionSource>,
    workers: usize,
}

impl InfoAggregator {
    /// Create an aggregator running at most `workers` lookups at once.
    pub fn new(cache: Arc<CacheStore>, source: Arc<dyn VersionSource>, workers: usize) -> Self {
        Self {
            cache,
            source,
            workers: workers.max(1),
        }
    }

    /// Maximum number of concurrent lookups.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Resolve the latest version of every package.
    ///
    /// Blocks until every lookup has finished. The output has one entry per
    /// input package, in input order.
    pub fn enrich(&self, packages: &[InstalledPackage]) -> Vec<PackageStatus> {
        if packages.is_empty() {
            return Vec::new();
        }

        let pool_size = self.workers.min(packages.len());
        let next = AtomicUsize::new(0);
        let (tx, rx) = mpsc::channel::<(usize, PackageStatus)>();

        tracing::debug!(
            "Resolving {} packages with {} workers",
            packages.len(),
            pool_size
        );

        thread::scope(|scope| {
            for _ in 0..pool_size {
                let tx = tx.clone();
                let next = &next;
                scope.spawn(move || loop {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some(package) = packages.get(index) else {
                        break;
                    };
                    if tx.send((index, self.status_for(package))).is_err() {
                        break;
                    }
                });
            }
        });
        drop(tx);

        let mut slots: Vec<Option<PackageStatus>> = vec![None; packages.len()];
        for (index, status) in rx {
            slots[index] = Some(status);
        }

        slots
            .into_iter()
            .zip(packages)
            .map(|(slot, package)| slot.unwrap_or_else(|| PackageStatus::unknown(package)))
            .collect()
    }

    /// All published versions of `name`, cache first, else a live lookup.
    ///
    /// A successful live lookup is written back to the cache.
    pub fn available_versions(&self, name: &str) -> Option<RegistryInfo> {
        self.cache.get(name).or_else(|| self.fetch_and_store(name))
    }

    fn status_for(&self, package: &InstalledPackage) -> PackageStatus {
        let info = self.available_versions(&package.name);
        PackageStatus {
            name: package.name.clone(),
            installed_version: package.installed_version.clone(),
            latest_version: info.map(|i| i.latest_version),
        }
    }

    fn fetch_and_store(&self, name: &str) -> Option<RegistryInfo> {
        tracing::debug!("Cache miss for {}", name);

        let versions = match self.source.fetch_versions(name) {
            Ok(versions) => versions?,
            Err(e) => {
                tracing::warn!("Version lookup for {} failed: {}", name, e);
                return None;
            }
        };

        let info = RegistryInfo::from_versions(versions)?;
        if let Err(e) = self.cache.set(name, info.clone()) {
            tracing::warn!("Could not cache versions for {}: {}", name, e);
        }
        Some(info)
    }
}
