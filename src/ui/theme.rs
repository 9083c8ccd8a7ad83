//! Visual theme and styling.

use console::{style, Style};
use dialoguer::theme::ColorfulTheme;

/// pipdeck's visual theme.
#[derive(Debug, Clone)]
pub struct PipdeckTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red).
    pub error: Style,
    /// Style for menu titles (bold cyan).
    pub title: Style,
    /// Style for the menu cursor (bold cyan).
    pub cursor: Style,
}

impl Default for PipdeckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PipdeckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            title: Style::new().cyan().bold(),
            cursor: Style::new().cyan().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            title: Style::new(),
            cursor: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Dialoguer theme for menus: cyan `➤` cursor, highlighted active row.
    pub fn menu_theme(&self) -> ColorfulTheme {
        ColorfulTheme {
            prompt_prefix: style(String::new()),
            prompt_style: self.title.clone().for_stderr(),
            active_item_prefix: self.cursor.apply_to("➤".to_string()).for_stderr(),
            active_item_style: self.cursor.clone().for_stderr(),
            ..ColorfulTheme::default()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = PipdeckTheme::plain();
        assert_eq!(
            theme.format_success("Successfully upgraded six"),
            "✓ Successfully upgraded six"
        );
    }

    #[test]
    fn theme_formats_warning() {
        let theme = PipdeckTheme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = PipdeckTheme::plain();
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = PipdeckTheme::default();
        let new = PipdeckTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }

    #[test]
    fn menu_theme_uses_arrow_cursor() {
        let theme = PipdeckTheme::plain().menu_theme();
        assert!(theme.active_item_prefix.to_string().contains("➤"));
    }
}
