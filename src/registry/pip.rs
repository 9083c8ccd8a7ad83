//! Version lookups through `pip index versions`.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::error::Result;
use crate::shell::{execute, CommandOptions};

use super::VersionSource;

/// Queries the package index by running `<python> -m pip index versions <name>`.
#[derive(Debug, Clone)]
pub struct PipIndex {
    python: PathBuf,
}

impl PipIndex {
    /// Create a lookup that runs pip with the given interpreter.
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }

    fn args(name: &str) -> [&str; 6] {
        [
            "-m",
            "pip",
            "index",
            "versions",
            name,
            "--disable-pip-version-check",
        ]
    }
}

impl VersionSource for PipIndex {
    fn fetch_versions(&self, name: &str) -> Result<Option<Vec<String>>> {
        let result = execute(&self.python, &Self::args(name), &CommandOptions::captured())?;

        if !result.success {
            tracing::debug!(
                "No index data for {}: {}",
                name,
                result.failure_detail().lines().next().unwrap_or_default()
            );
            return Ok(None);
        }

        Ok(parse_available_versions(&result.stdout))
    }
}

static AVAILABLE_VERSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)Available versions:[ \t]*(.*?)[ \t\r]*$")
        .expect("AVAILABLE_VERSIONS must compile")
});

/// Extract the version list from `pip index versions` output.
///
/// Only the remainder of the first `Available versions:` line is used, split
/// on commas. Returns `None` when the label is missing or lists nothing.
pub fn parse_available_versions(output: &str) -> Option<Vec<String>> {
    let caps = AVAILABLE_VERSIONS.captures(output)?;
    let versions: Vec<String> = caps[1]
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect();

    if versions.is_empty() {
        None
    } else {
        Some(versions)
    }
}
