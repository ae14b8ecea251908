//! Exit handling: signal handlers and terminal cleanup.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the screen owns the alternate screen buffer.
static ALT_SCREEN: AtomicBool = AtomicBool::new(false);

/// Reset attributes and show the cursor.
const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";
/// Leave the alternate screen first, then reset attributes and show the cursor.
const RESTORE_ALT: &[u8] = b"\x1b[?1049l\x1b[0m\x1b[?25h";

pub fn set_alt_screen(active: bool) {
    ALT_SCREEN.store(active, Ordering::SeqCst);
}

/// `?1049l` also restores the saved cursor, so it is only sent when the
/// alternate screen was actually entered.
fn restore_bytes(alt_screen: bool) -> &'static [u8] {
    if alt_screen { RESTORE_ALT } else { RESTORE }
}

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    let bytes = restore_bytes(ALT_SCREEN.load(Ordering::SeqCst));
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, bytes.as_ptr() as *const libc::c_void, bytes.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Reset terminal state (public for use in other modules)
pub fn reset_terminal() {
    reset_terminal_termios();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn plain_exit_does_not_leave_alt_screen() {
        let bytes = restore_bytes(false);
        assert!(!contains(bytes, b"?1049l"));
        assert!(contains(bytes, b"\x1b[?25h"));
    }

    #[test]
    fn screen_exit_leaves_alt_screen() {
        assert!(restore_bytes(true).starts_with(b"\x1b[?1049l"));
    }
}
