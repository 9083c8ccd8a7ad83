//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Menu selections are replayed from a
//! queue; once the queue is empty every menu is dismissed, as if Esc had
//! been pressed.
//!
//! # Example
//!
//! ```
//! use pipdeck::ui::{Menu, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_selections([Some(0), None]);
//!
//! let menu = Menu::new("Python Package Manager", ["requests", "Quit"]);
//! assert_eq!(ui.select(&menu).unwrap(), Some(0));
//! assert_eq!(ui.select(&menu).unwrap(), None);
//!
//! ui.success("Done!");
//! assert!(ui.has_success("Done!"));
//! ```

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::{PipdeckError, Result};

use super::{Menu, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    menus: Vec<Menu>,
    spinners: Vec<String>,
    spinners_cleared: Rc<Cell<usize>>,
    selections: VecDeque<Option<usize>>,
    interrupt_when_exhausted: bool,
    enter_presses: usize,
    screen_clears: usize,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue menu selections, consumed in order by `select`.
    pub fn queue_selections(&mut self, selections: impl IntoIterator<Item = Option<usize>>) {
        self.selections.extend(selections);
    }

    /// Make `select` report Ctrl-C once the queue is empty, instead of Esc.
    pub fn interrupt_when_exhausted(&mut self) {
        self.interrupt_when_exhausted = true;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get every menu that was shown, in order.
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    /// Get the titles of every menu that was shown, in order.
    pub fn menus_shown(&self) -> Vec<&str> {
        self.menus.iter().map(|m| m.title.as_str()).collect()
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Number of spinners that were cleared.
    pub fn spinners_cleared(&self) -> usize {
        self.spinners_cleared.get()
    }

    /// Number of times the user acknowledged with Enter.
    pub fn enter_presses(&self) -> usize {
        self.enter_presses
    }

    /// Number of screen clears.
    pub fn screen_clears(&self) -> usize {
        self.screen_clears
    }

    /// Number of queued selections not yet consumed.
    pub fn pending_selections(&self) -> usize {
        self.selections.len()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn select(&mut self, menu: &Menu) -> Result<Option<usize>> {
        self.menus.push(menu.clone());

        match self.selections.pop_front() {
            Some(choice) => Ok(choice.filter(|&i| i < menu.items.len())),
            None if self.interrupt_when_exhausted => Err(PipdeckError::Interrupted),
            None => Ok(None),
        }
    }

    fn wait_for_enter(&mut self) -> Result<()> {
        self.enter_presses += 1;
        Ok(())
    }

    fn clear_screen(&mut self) {
        self.screen_clears += 1;
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            cleared: Rc::clone(&self.spinners_cleared),
        })
    }
}

/// Spinner handed out by [`MockUI`]; clearing it is counted by the UI.
#[derive(Debug)]
struct MockSpinner {
    cleared: Rc<Cell<usize>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_and_clear(&mut self) {
        self.cleared.set(self.cleared.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::new("Options for six", ["Upgrade", "Downgrade", "Uninstall", "Back"])
    }

    #[test]
    fn captures_messages() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("ok");
        ui.warning("careful");
        ui.error("bad");

        assert!(ui.has_message("hello"));
        assert!(ui.has_success("ok"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("bad"));
    }

    #[test]
    fn replays_selections_in_order() {
        let mut ui = MockUI::new();
        ui.queue_selections([Some(2), Some(0)]);

        assert_eq!(ui.select(&menu()).unwrap(), Some(2));
        assert_eq!(ui.select(&menu()).unwrap(), Some(0));
        assert_eq!(ui.pending_selections(), 0);
        assert_eq!(ui.menus().len(), 2);
    }

    #[test]
    fn exhausted_queue_dismisses() {
        let mut ui = MockUI::new();
        assert_eq!(ui.select(&menu()).unwrap(), None);
    }

    #[test]
    fn exhausted_queue_can_interrupt() {
        let mut ui = MockUI::new();
        ui.interrupt_when_exhausted();
        assert!(matches!(ui.select(&menu()), Err(PipdeckError::Interrupted)));
    }

    #[test]
    fn out_of_range_selection_dismisses() {
        let mut ui = MockUI::new();
        ui.queue_selections([Some(10)]);
        assert_eq!(ui.select(&menu()).unwrap(), None);
    }

    #[test]
    fn counts_enter_and_clears() {
        let mut ui = MockUI::new();
        ui.wait_for_enter().unwrap();
        ui.clear_screen();
        ui.clear_screen();

        assert_eq!(ui.enter_presses(), 1);
        assert_eq!(ui.screen_clears(), 2);
    }

    #[test]
    fn records_spinners() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Fetching package information...");
        assert_eq!(ui.spinners_cleared(), 0);
        spinner.finish_and_clear();
        assert_eq!(ui.spinners(), ["Fetching package information..."]);
        assert_eq!(ui.spinners_cleared(), 1);
    }
}
