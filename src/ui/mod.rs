//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`MockUI`] for driving the menus from tests
//! - Menus, spinners, and the colour theme
//!
//! # Example
//!
//! ```
//! use pipdeck::ui::{Menu, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_selections([Some(1)]);
//!
//! let menu = Menu::new("Options for requests", ["Upgrade", "Back"]);
//! assert_eq!(ui.select(&menu).unwrap(), Some(1));
//! assert_eq!(ui.menus_shown(), ["Options for requests"]);
//! ```

pub mod mock;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use prompts::select_menu;
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PipdeckTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a selectable menu.
    ///
    /// Returns the chosen index, or `None` when the user dismisses the menu.
    fn select(&mut self, menu: &Menu) -> Result<Option<usize>>;

    /// Block until the user presses Enter.
    fn wait_for_enter(&mut self) -> Result<()>;

    /// Clear the screen.
    fn clear_screen(&mut self);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Remove the spinner without leaving a line behind.
    fn finish_and_clear(&mut self);
}

/// A titled list of selectable rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    /// Title shown above the rows.
    pub title: String,
    /// Rows, in display order.
    pub items: Vec<String>,
    /// Whether typing filters the rows.
    pub searchable: bool,
}

impl Menu {
    /// Create a menu.
    pub fn new<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
            searchable: false,
        }
    }

    /// Let the user filter rows by typing.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Row at `index`.
    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }
}
