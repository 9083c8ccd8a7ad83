//! Installed package enumeration.
//!
//! A [`PackageInspector`] takes a snapshot of the installed packages. The
//! production inspector is [`PipList`].

pub mod pip;

pub use pip::{parse_pip_list, PipList};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An installed package and its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPackage {
    /// Distribution name as reported by the installer.
    pub name: String,
    /// Installed version.
    #[serde(rename = "version")]
    pub installed_version: String,
}

impl InstalledPackage {
    /// Create a new installed package record.
    pub fn new(name: impl Into<String>, installed_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            installed_version: installed_version.into(),
        }
    }
}

/// Enumerates installed packages.
pub trait PackageInspector {
    /// Take a snapshot of the installed packages.
    fn installed(&self) -> Result<Vec<InstalledPackage>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installed_package_creation() {
        let pkg = InstalledPackage::new("requests", "2.31.0");
        assert_eq!(pkg.name, "requests");
        assert_eq!(pkg.installed_version, "2.31.0");
    }

    #[test]
    fn deserializes_pip_field_names() {
        let pkg: InstalledPackage =
            serde_json::from_str(r#"{"name": "six", "version": "1.16.0"}"#).unwrap();
        assert_eq!(pkg, InstalledPackage::new("six", "1.16.0"));
    }
}
