//! Package actions: upgrade, install a pinned version, uninstall.

pub mod executor;
pub mod installer;

pub use executor::ActionExecutor;
pub use installer::{Installer, InstallerAction, PipInstaller};
