//! Installer commands.

use std::fmt;
use std::path::PathBuf;

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

/// A change to the installed package set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallerAction {
    /// Upgrade to the newest available version.
    Upgrade { name: String },
    /// Install an exact version (used for downgrades).
    InstallVersion { name: String, version: String },
    /// Remove the package.
    Uninstall { name: String },
}

impl InstallerAction {
    /// Arguments passed to `pip`.
    pub fn pip_args(&self) -> Vec<String> {
        match self {
            Self::Upgrade { name } => vec!["install".into(), "--upgrade".into(), name.clone()],
            Self::InstallVersion { name, version } => {
                vec!["install".into(), format!("{}=={}", name, version)]
            }
            Self::Uninstall { name } => vec!["uninstall".into(), "-y".into(), name.clone()],
        }
    }

    /// Whether pip's stdout should be captured rather than shown live.
    pub fn captures_output(&self) -> bool {
        matches!(self, Self::InstallVersion { .. })
    }

    /// Message for a successful run.
    pub fn success_message(&self) -> String {
        match self {
            Self::Upgrade { name } => format!("Successfully upgraded {}", name),
            Self::InstallVersion { name, version } => {
                format!("Successfully installed {} version {}", name, version)
            }
            Self::Uninstall { name } => format!("Successfully uninstalled {}", name),
        }
    }

    /// Message for a failed run.
    pub fn failure_message(&self) -> String {
        match self {
            Self::Upgrade { name } => format!("Failed to upgrade {}", name),
            Self::InstallVersion { name, version } => {
                format!("Failed to install {} version {}", name, version)
            }
            Self::Uninstall { name } => format!("Failed to uninstall {}", name),
        }
    }
}

impl fmt::Display for InstallerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upgrade { name } => write!(f, "upgrade {}", name),
            Self::InstallVersion { name, version } => write!(f, "install {}=={}", name, version),
            Self::Uninstall { name } => write!(f, "uninstall {}", name),
        }
    }
}

/// Runs installer actions.
pub trait Installer {
    /// Run `action` to completion. A non-zero exit is an unsuccessful
    /// [`CommandResult`], not an `Err`.
    fn run(&self, action: &InstallerAction) -> Result<CommandResult>;
}

/// Runs actions as `<python> -m pip ...`.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: PathBuf,
}

impl PipInstaller {
    /// Create an installer for the given interpreter.
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl Installer for PipInstaller {
    fn run(&self, action: &InstallerAction) -> Result<CommandResult> {
        let mut args = vec!["-m".to_string(), "pip".to_string()];
        args.extend(action.pip_args());

        let options = if action.captures_output() {
            CommandOptions::captured()
        } else {
            CommandOptions::streamed()
        };

        tracing::debug!("Running pip {}", action);
        execute(&self.python, &args, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upgrade() -> InstallerAction {
        InstallerAction::Upgrade {
            name: "requests".into(),
        }
    }

    fn install() -> InstallerAction {
        InstallerAction::InstallVersion {
            name: "requests".into(),
            version: "2.30.0".into(),
        }
    }

    fn uninstall() -> InstallerAction {
        InstallerAction::Uninstall {
            name: "requests".into(),
        }
    }

    #[test]
    fn pip_args_per_action() {
        assert_eq!(upgrade().pip_args(), vec!["install", "--upgrade", "requests"]);
        assert_eq!(install().pip_args(), vec!["install", "requests==2.30.0"]);
        assert_eq!(uninstall().pip_args(), vec!["uninstall", "-y", "requests"]);
    }

    #[test]
    fn only_pinned_install_captures_output() {
        assert!(!upgrade().captures_output());
        assert!(install().captures_output());
        assert!(!uninstall().captures_output());
    }

    #[test]
    fn messages() {
        assert_eq!(upgrade().success_message(), "Successfully upgraded requests");
        assert_eq!(upgrade().failure_message(), "Failed to upgrade requests");
        assert_eq!(
            install().success_message(),
            "Successfully installed requests version 2.30.0"
        );
        assert_eq!(
            install().failure_message(),
            "Failed to install requests version 2.30.0"
        );
        assert_eq!(uninstall().success_message(), "Successfully uninstalled requests");
        assert_eq!(uninstall().failure_message(), "Failed to uninstall requests");
    }

    #[test]
    fn display() {
        assert_eq!(install().to_string(), "install requests==2.30.0");
    }

    #[cfg(unix)]
    #[test]
    fn pip_installer_reports_non_zero_exit() {
        let result = PipInstaller::new("false").run(&install()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }
}
