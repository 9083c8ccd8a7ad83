//! The interactive menu loop.
//!
//! ```text
//! MainMenu ──select package──▶ PackageActionMenu ──Downgrade──▶ VersionMenu
//!    ▲  │                        │  ▲      │                      │   │
//!    │  └─Quit/Esc──▶ exit       │  └─failure / Back──────────────┘   │
//!    │                           │                                    │
//!    ├──────Back/Esc (no refresh)┘                                    │
//!    └──────────────success (refresh)─────────────────────────────────┘
//! ```
//!
//! Dismissing a menu is the same as choosing Back (or Quit on the main menu).
//! Only a successful action re-enumerates packages and re-runs aggregation.

pub mod format;

pub use format::format_package_rows;

use std::iter;

use crate::actions::ActionExecutor;
use crate::aggregator::{InfoAggregator, PackageStatus};
use crate::error::Result;
use crate::packages::PackageInspector;
use crate::ui::{Menu, UserInterface};

/// Title of the main menu.
pub const MAIN_TITLE: &str = "Python Package Manager";

/// Last row of the main menu.
pub const QUIT: &str = "Quit";

/// First row of the version menu.
pub const BACK: &str = "Back";

/// Entries of the per-package menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageAction {
    Upgrade,
    Downgrade,
    Uninstall,
    Back,
}

impl PackageAction {
    /// All entries, in display order.
    pub const ALL: [PackageAction; 4] = [
        PackageAction::Upgrade,
        PackageAction::Downgrade,
        PackageAction::Uninstall,
        PackageAction::Back,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            PackageAction::Upgrade => "Upgrade",
            PackageAction::Downgrade => "Downgrade",
            PackageAction::Uninstall => "Uninstall",
            PackageAction::Back => BACK,
        }
    }
}

/// Drives the menus until the user quits.
pub struct MenuShell<'a> {
    inspector: &'a dyn PackageInspector,
    aggregator: &'a InfoAggregator,
    executor: &'a ActionExecutor,
}

impl<'a> MenuShell<'a> {
    /// Create a shell over the given components.
    pub fn new(
        inspector: &'a dyn PackageInspector,
        aggregator: &'a InfoAggregator,
        executor: &'a ActionExecutor,
    ) -> Self {
        Self {
            inspector,
            aggregator,
            executor,
        }
    }

    /// Run the main menu loop. Returns when the user quits.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let mut statuses = self.refresh(ui)?;

        loop {
            let rows = format_package_rows(&statuses)
                .into_iter()
                .chain(iter::once(QUIT.to_string()));
            let menu = Menu::new(MAIN_TITLE, rows).searchable();

            let Some(status) = ui.select(&menu)?.and_then(|i| statuses.get(i)) else {
                ui.message("Exiting the package manager.");
                return Ok(());
            };

            if self.package_options(ui, status)? {
                statuses = self.refresh(ui)?;
            }
        }
    }

    /// Snapshot installed packages and resolve their latest versions.
    fn refresh(&self, ui: &mut dyn UserInterface) -> Result<Vec<PackageStatus>> {
        ui.clear_screen();
        let packages = self.inspector.installed()?;

        let mut spinner = ui.start_spinner("Fetching package information...");
        let statuses = self.aggregator.enrich(&packages);
        spinner.finish_and_clear();

        tracing::debug!(
            "{} packages, {} with updates",
            statuses.len(),
            statuses.iter().filter(|s| s.has_update()).count()
        );

        ui.clear_screen();
        Ok(statuses)
    }

    /// Per-package menu. Returns true once an action succeeds.
    fn package_options(&self, ui: &mut dyn UserInterface, status: &PackageStatus) -> Result<bool> {
        let menu = Menu::new(
            format!("Options for {}", status.name),
            PackageAction::ALL.map(PackageAction::label),
        );

        loop {
            let choice = ui
                .select(&menu)?
                .and_then(|i| PackageAction::ALL.get(i).copied());

            let succeeded = match choice {
                None | Some(PackageAction::Back) => return Ok(false),
                Some(PackageAction::Upgrade) => self.executor.upgrade(ui, &status.name)?,
                Some(PackageAction::Downgrade) => self.downgrade(ui, status)?,
                Some(PackageAction::Uninstall) => self.executor.uninstall(ui, &status.name)?,
            };

            if succeeded {
                return Ok(true);
            }
        }
    }

    /// Version menu. Loops on failed installs until success or Back.
    fn downgrade(&self, ui: &mut dyn UserInterface, status: &PackageStatus) -> Result<bool> {
        ui.message(&format!(
            "Fetching available versions for {}...",
            status.name
        ));

        let Some(info) = self.aggregator.available_versions(&status.name) else {
            ui.error(&format!("No versions available for {}", status.name));
            ui.wait_for_enter()?;
            return Ok(false);
        };

        let menu = Menu::new(
            format!(
                "Select version to downgrade {} (Current: {})",
                status.name, status.installed_version
            ),
            iter::once(BACK.to_string()).chain(info.all_versions),
        );

        loop {
            let version = match ui.select(&menu)? {
                None | Some(0) => return Ok(false),
                Some(i) => match menu.item(i) {
                    Some(version) => version,
                    None => return Ok(false),
                },
            };

            if self.executor.install_version(ui, &status.name, version)? {
                return Ok(true);
            }
        }
    }
}
