//! External command execution and process-level platform behaviour.

pub mod command;
pub mod platform;

pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use platform::{default_python, install_interrupt_handler, INTERRUPT_MESSAGE};
