//! Random source selection.
//!
//! Generation takes any `rand::Rng`; this module builds the one the program
//! owns. A fixed seed gives reproducible output, otherwise the generator is
//! seeded once from the OS.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Where the generator's seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Os,
    Fixed(u64),
}

impl Seed {
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or(Seed::Os, Seed::Fixed)
    }

    /// Build the random source for this seed.
    pub fn rng(self) -> StdRng {
        match self {
            Seed::Os => StdRng::from_os_rng(),
            Seed::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }

    pub fn describe(self) -> String {
        match self {
            Seed::Os => "StdRng (OS seeded)".to_string(),
            Seed::Fixed(seed) => format!("StdRng (seed {seed})"),
        }
    }
}
