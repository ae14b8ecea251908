//! Password generation.

use rand::Rng;

use super::charset;
use crate::error::{Error, Result};
use crate::settings::{GenerationConfig, IndexPolicy};

/// Generate a single password based on the config.
///
/// Each position draws a uniform value in `[0, 1)`, scales it by the combined
/// alphabet length and maps it to an index according to the config's
/// [`IndexPolicy`]. An empty alphabet is rejected up front.
pub fn generate<R: Rng>(config: &GenerationConfig, rng: &mut R) -> Result<String> {
    let chars = charset::build(&config.classes);
    if chars.is_empty() {
        return Err(Error::NoClassesSelected);
    }

    let password: String = (0..config.length)
        .filter_map(|_| pick(&chars, rng.random::<f64>(), config.index_policy))
        .collect();

    log::debug!(
        "generated {} of {} chars from a {}-char alphabet",
        password.chars().count(),
        config.length,
        chars.len()
    );
    Ok(password)
}

/// Generate `count` passwords with the same config and random source.
pub fn generate_batch<R: Rng>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    (0..count).map(|_| generate(config, rng)).collect()
}

#[inline]
fn pick(chars: &[char], draw: f64, policy: IndexPolicy) -> Option<char> {
    let scaled = draw * chars.len() as f64;
    let idx = match policy {
        IndexPolicy::Floor => (scaled.floor() as usize).min(chars.len() - 1),
        IndexPolicy::Round => scaled.round() as usize,
    };
    chars.get(idx).copied()
}
