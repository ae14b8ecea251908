//! CLI context - bundles the generation config, flags, and clipboard state.

use std::io::{self, BufWriter, Write};

use anyhow::Context as _;
use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::entropy::Seed;
use crate::error::Result;
use crate::pass;
use crate::settings::{GenerationConfig, IndexPolicy};
use crate::terminal::copy_to;

/// Application context for CLI mode.
pub struct Context {
    pub config: GenerationConfig,
    pub seed: Seed,
    pub count: usize,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self {
            config: flags.config(),
            seed: flags.seed(),
            count: flags.count(),
            flags,
            clipboard: None,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        quiet::set(self.flags.quiet);
        if self.config.index_policy == IndexPolicy::Round {
            prompts::legacy_rounding();
        }

        let mut passwords = self.generate()?;

        let printed = if self.flags.board && self.open_clipboard() {
            self.copy_to_clipboard(&passwords)
                .context("failed to copy passwords to the clipboard")
        } else {
            let stdout = io::stdout();
            write_passwords(&mut BufWriter::new(stdout.lock()), &passwords)
                .context("failed to write passwords to stdout")
        };

        passwords.iter_mut().for_each(|p| p.zeroize());
        printed
    }

    /// Generate `count` passwords from a fresh source for this context's seed.
    pub fn generate(&self) -> anyhow::Result<Vec<String>> {
        let mut rng = self.seed.rng();
        log::debug!(
            "generating {} password(s), length {}, {}",
            self.count,
            self.config.length,
            self.seed.describe()
        );
        pass::generate_batch(&self.config, self.count, &mut rng)
            .context("password generation failed")
    }

    /// Returns false when the user declines to fall back to printing.
    fn open_clipboard(&mut self) -> bool {
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                log::warn!("clipboard unavailable: {e}");
                if prompts::clipboard_fallback_prompt() {
                    false
                } else {
                    std::process::exit(0);
                }
            }
        }
    }

    fn copy_to_clipboard(&mut self, passwords: &[String]) -> Result<()> {
        match self.clipboard.as_mut() {
            Some(ctx) => copy_passwords(ctx, passwords),
            None => Ok(()),
        }
    }
}

/// Copy the batch as newline-separated text.
pub fn copy_passwords<C: ClipboardProvider>(ctx: &mut C, passwords: &[String]) -> Result<()> {
    let mut joined = passwords.join("\n");
    let copied = copy_to(ctx, &joined);
    joined.zeroize();
    copied?;
    prompts::clipboard_copied(passwords.len());
    Ok(())
}

/// Write one password per line.
pub fn write_passwords<W: Write>(out: &mut W, passwords: &[String]) -> io::Result<()> {
    for password in passwords {
        out.write_all(password.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
