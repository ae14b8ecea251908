mod context;
mod flags;
mod prompts;
mod quiet;

pub use context::Context;
pub use flags::CliFlags;

/// Run one-shot CLI generation.
pub fn run(flags: CliFlags) -> anyhow::Result<()> {
    Context::new(flags).run()
}
