//! Interactive terminal UI.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use std::io::Write;

use crate::error::Result;

use super::prompts::{select_menu, wait_for_enter};
use super::{should_use_colors, Menu, PipdeckTheme, ProgressSpinner, SpinnerHandle, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: PipdeckTheme,
    menu_theme: ColorfulTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            PipdeckTheme::new()
        } else {
            PipdeckTheme::plain()
        };
        let menu_theme = theme.menu_theme();

        Self {
            term: Term::stdout(),
            theme,
            menu_theme,
        }
    }

    /// Check if stdout is attached to a terminal.
    pub fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn select(&mut self, menu: &Menu) -> Result<Option<usize>> {
        select_menu(menu, &self.term, &self.menu_theme)
    }

    fn wait_for_enter(&mut self) -> Result<()> {
        wait_for_enter(&self.term)
    }

    fn clear_screen(&mut self) {
        self.term.clear_screen().ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.term.is_term() {
            Box::new(ProgressSpinner::new(message))
        } else {
            self.message(message);
            Box::new(ProgressSpinner::hidden())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new();
        drop(ui);
    }

    #[test]
    fn spinner_without_terminal_is_hidden() {
        let mut ui = TerminalUI::new();
        let mut spinner = ui.start_spinner("Fetching package information...");
        spinner.finish_and_clear();
    }
}
