//! pipdeck - Interactive terminal manager for installed Python packages.
//!
//! pipdeck lists the packages installed in a Python environment next to their
//! latest published versions and lets the user upgrade, downgrade or
//! uninstall them from a menu.
//!
//! # Modules
//!
//! - [`actions`] - Upgrade, pinned install and uninstall through pip
//! - [`aggregator`] - Concurrent latest-version resolution
//! - [`cache`] - Persistent registry metadata cache with TTL
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Resolved runtime settings
//! - [`error`] - Error types and result aliases
//! - [`menu`] - The interactive menu loop
//! - [`packages`] - Installed package enumeration
//! - [`registry`] - Published version lookup
//! - [`shell`] - Subprocess execution and interrupt handling
//! - [`ui`] - Menus, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use pipdeck::registry::parse_available_versions;
//!
//! let output = "requests (2.32.3)\nAvailable versions: 2.32.3, 2.32.2, 2.31.0\n";
//! let versions = parse_available_versions(output).unwrap();
//! assert_eq!(versions[0], "2.32.3");
//! assert_eq!(versions.len(), 3);
//! ```

pub mod actions;
pub mod aggregator;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod packages;
pub mod registry;
pub mod shell;
pub mod ui;

pub use error::{PipdeckError, Result};
