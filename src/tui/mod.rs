//! Interactive generator screen.

mod input;
mod screen;
mod state;
mod text;

use crate::entropy::Seed;
use crate::error::Result;
use crate::settings::GenerationConfig;

/// Run TUI interactive mode.
pub fn run(config: GenerationConfig, seed: Seed) -> Result<()> {
    screen::run_screen(config, seed)
}
