mod cli;
mod entropy;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cli::CliFlags;

fn main() -> ExitCode {
    let flags = CliFlags::parse();
    init_logging(flags.wants_screen());

    exits::reset_terminal();
    exits::install_handlers();

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            terminal::print_error(&format!("Error: {e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(flags: CliFlags) -> Result<()> {
    if flags.wants_screen() {
        tui::run(flags.config(), flags.seed()).context("interactive screen failed")
    } else {
        cli::run(flags)
    }
}

/// Logs go to stderr, which would draw over the screen, so interactive mode
/// stays silent unless RUST_LOG asks otherwise.
fn init_logging(screen: bool) {
    let default = if screen { "off" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
