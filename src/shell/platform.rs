//! Platform-specific process behaviour.

/// Message printed when the user interrupts the program.
pub const INTERRUPT_MESSAGE: &str = "Program interrupted. Exiting gracefully.";

/// Default Python interpreter name for this platform.
pub fn default_python() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Make Ctrl-C outside of a menu exit cleanly with status 0.
///
/// Menus read Ctrl-C as a key press and report it as
/// [`PipdeckError::Interrupted`](crate::error::PipdeckError::Interrupted).
/// While a pip subprocess or the registry fan-out runs, SIGINT is delivered to
/// the process instead; this handler restores the cursor and exits.
pub fn install_interrupt_handler() {
    #[cfg(unix)]
    {
        extern "C" fn on_sigint(_signal: libc::c_int) {
            let msg = format_interrupt_bytes();
            // SAFETY: write(2) and _exit(2) are async-signal-safe, and the
            // buffer is a static byte string.
            unsafe {
                libc::write(libc::STDOUT_FILENO, msg.as_ptr().cast(), msg.len());
                libc::_exit(0);
            }
        }

        let handler = on_sigint as extern "C" fn(libc::c_int);
        // SAFETY: installing a handler for SIGINT with a valid function pointer.
        unsafe {
            libc::signal(libc::SIGINT, handler as libc::sighandler_t);
        }
    }
}

/// Show-cursor escape, then the interrupt message on its own line.
#[cfg(unix)]
const fn format_interrupt_bytes() -> &'static [u8] {
    b"\x1b[?25h\nProgram interrupted. Exiting gracefully.\n"
}
