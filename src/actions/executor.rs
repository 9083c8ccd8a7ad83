//! Runs installer actions and reports the outcome.

use crate::error::Result;
use crate::ui::UserInterface;

use super::installer::{Installer, InstallerAction};

/// Performs upgrades, pinned installs and uninstalls.
///
/// Every action is logged. Anything pip writes to stderr on a successful run
/// is shown as a warning. A failure is shown to the user, who must
/// acknowledge it before control returns.
pub struct ActionExecutor {
    installer: Box<dyn Installer>,
}

impl ActionExecutor {
    /// Create an executor around an installer.
    pub fn new(installer: Box<dyn Installer>) -> Self {
        Self { installer }
    }

    /// Upgrade `name` to its newest version.
    pub fn upgrade(&self, ui: &mut dyn UserInterface, name: &str) -> Result<bool> {
        self.perform(
            ui,
            InstallerAction::Upgrade {
                name: name.to_string(),
            },
        )
    }

    /// Install exactly `version` of `name`.
    pub fn install_version(
        &self,
        ui: &mut dyn UserInterface,
        name: &str,
        version: &str,
    ) -> Result<bool> {
        ui.message(&format!("Attempting to install {}=={}", name, version));
        self.perform(
            ui,
            InstallerAction::InstallVersion {
                name: name.to_string(),
                version: version.to_string(),
            },
        )
    }

    /// Uninstall `name`.
    pub fn uninstall(&self, ui: &mut dyn UserInterface, name: &str) -> Result<bool> {
        self.perform(
            ui,
            InstallerAction::Uninstall {
                name: name.to_string(),
            },
        )
    }

    /// Run `action`, returning whether it succeeded.
    ///
    /// Only an error while waiting for the acknowledgment is returned as `Err`.
    pub fn perform(&self, ui: &mut dyn UserInterface, action: InstallerAction) -> Result<bool> {
        let detail = match self.installer.run(&action) {
            Ok(result) if result.success => {
                let warnings = result.stderr.trim();
                if !warnings.is_empty() {
                    tracing::warn!("pip {}: {}", action, warnings);
                    ui.warning(warnings);
                }

                let msg = action.success_message();
                tracing::info!("{} in {:.1?}", msg, result.duration);
                ui.success(&msg);
                return Ok(true);
            }
            Ok(result) => result.failure_detail(),
            Err(e) => e.to_string(),
        };

        let msg = action.failure_message();
        tracing::error!("{}: {}", msg, detail);
        ui.error(&msg);
        ui.message(&format!("Error: {}", detail));
        if matches!(action, InstallerAction::InstallVersion { .. }) {
            ui.message("Please try a different version.");
        }
        ui.wait_for_enter()?;
        Ok(false)
    }
}
