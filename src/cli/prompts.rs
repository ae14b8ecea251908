//! Centralized notices and prompts for CLI output.

use std::io::Write;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** {count} password(s) COPIED TO CLIPBOARD ***");
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Quiet or non-interactive runs fall back to printing without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }

    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn legacy_rounding() {
    warn("Note: legacy rounding can drop characters, passwords may come out short.");
}
