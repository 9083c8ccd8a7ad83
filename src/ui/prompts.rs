//! Interactive menus and acknowledgments.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Select};
use std::io::{self, Write};

use crate::error::{PipdeckError, Result};

use super::Menu;

/// Prompt shown before blocking on Enter.
pub const CONTINUE_PROMPT: &str = "Press Enter to continue...";

/// Convert dialoguer errors to PipdeckError.
///
/// Menus read Ctrl-C as a key; console reports it as an interrupted read.
fn map_dialoguer_err(e: dialoguer::Error) -> PipdeckError {
    map_io_err(e.into())
}

fn map_io_err(e: io::Error) -> PipdeckError {
    if e.kind() == io::ErrorKind::Interrupted {
        PipdeckError::Interrupted
    } else {
        PipdeckError::Io(e)
    }
}

/// Show `menu` and return the selected row, or `None` on Esc/`q`.
pub fn select_menu(menu: &Menu, term: &Term, theme: &ColorfulTheme) -> Result<Option<usize>> {
    if menu.searchable {
        FuzzySelect::with_theme(theme)
            .with_prompt(&menu.title)
            .items(&menu.items)
            .default(0)
            .interact_on_opt(term)
            .map_err(map_dialoguer_err)
    } else {
        Select::with_theme(theme)
            .with_prompt(&menu.title)
            .items(&menu.items)
            .default(0)
            .interact_on_opt(term)
            .map_err(map_dialoguer_err)
    }
}

/// Print the continue prompt and block until a line is read.
pub fn wait_for_enter(term: &Term) -> Result<()> {
    let mut out = term.clone();
    write!(out, "{}", CONTINUE_PROMPT)?;
    out.flush()?;
    term.read_line().map_err(map_io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_read_maps_to_interrupted() {
        let err = map_io_err(io::Error::new(io::ErrorKind::Interrupted, "read interrupted"));
        assert!(matches!(err, PipdeckError::Interrupted));
    }

    #[test]
    fn other_io_errors_are_kept() {
        let err = map_io_err(io::Error::new(io::ErrorKind::NotConnected, "not a terminal"));
        assert!(matches!(err, PipdeckError::Io(_)));
    }

    #[test]
    fn dialoguer_interrupt_maps_to_interrupted() {
        let err = map_dialoguer_err(dialoguer::Error::IO(io::Error::new(
            io::ErrorKind::Interrupted,
            "read interrupted",
        )));
        assert!(matches!(err, PipdeckError::Interrupted));
    }
}
