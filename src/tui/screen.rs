use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{self, Event};

use super::input::{Command, command_for};
use super::state::{Action, ScreenState};
use super::text::render_screen;
use crate::entropy::Seed;
use crate::error::{Error, Result};
use crate::settings::GenerationConfig;
use crate::terminal::{RawModeGuard, copy_to};

/// Run the generator screen until the user quits.
pub fn run_screen(config: GenerationConfig, seed: Seed) -> Result<()> {
    let mut rng = seed.rng();
    let source = seed.describe();
    let mut state = ScreenState::new(config);
    let mut clipboard: Option<ClipboardContext> = None;

    let mut guard = RawModeGuard::new()?;
    log::debug!("screen started with {}", source);

    loop {
        render_screen(&state, &source).draw();

        // Anything but a key press (resize, focus) just redraws.
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match command_for(key) {
            Some(Command::Quit) => break,
            Some(Command::Copy) => {
                let outcome = match copy_password(&state, &mut clipboard) {
                    Ok(()) => Action::Copied,
                    Err(e) => {
                        log::warn!("{e}");
                        Action::CopyFailed(e.to_string())
                    }
                };
                state.apply(outcome, &mut rng);
            }
            Some(Command::Apply(action)) => state.apply(action, &mut rng),
            None => {}
        }
    }

    guard.disable();
    Ok(())
}

fn copy_password(state: &ScreenState, clipboard: &mut Option<ClipboardContext>) -> Result<()> {
    if !state.is_generated() {
        return Err(Error::Clipboard("generate a password first".to_string()));
    }
    if clipboard.is_none() {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        *clipboard = Some(ctx);
    }
    match clipboard.as_mut() {
        Some(ctx) => copy_generated(state, ctx),
        None => Ok(()),
    }
}

fn copy_generated<C: ClipboardProvider>(state: &ScreenState, ctx: &mut C) -> Result<()> {
    let Some(password) = state.password() else {
        return Err(Error::Clipboard("generate a password first".to_string()));
    };
    copy_to(ctx, password)?;
    log::debug!("password copied to clipboard");
    Ok(())
}
