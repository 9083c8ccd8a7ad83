//! Installed package listing through `pip list --format=json`.

use std::path::PathBuf;

use crate::error::{PipdeckError, Result};
use crate::shell::{display_command, execute, CommandOptions};

use super::{InstalledPackage, PackageInspector};

const LIST_ARGS: [&str; 5] = [
    "-m",
    "pip",
    "list",
    "--format=json",
    "--disable-pip-version-check",
];

/// Lists the packages installed for a Python interpreter.
#[derive(Debug, Clone)]
pub struct PipList {
    python: PathBuf,
}

impl PipList {
    /// Create an inspector for the given interpreter.
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl PackageInspector for PipList {
    fn installed(&self) -> Result<Vec<InstalledPackage>> {
        let result = execute(&self.python, &LIST_ARGS, &CommandOptions::captured())?;

        if !result.success {
            tracing::error!(
                "Listing installed packages failed: {}",
                result.failure_detail()
            );
            return Err(PipdeckError::CommandFailed {
                command: display_command(&self.python, &LIST_ARGS),
                code: result.exit_code,
            });
        }

        parse_pip_list(&result.stdout)
    }
}

/// Parse the JSON array printed by `pip list --format=json`.
pub fn parse_pip_list(json: &str) -> Result<Vec<InstalledPackage>> {
    serde_json::from_str(json.trim()).map_err(|e| PipdeckError::InstalledListParse {
        message: e.to_string(),
    })
}
