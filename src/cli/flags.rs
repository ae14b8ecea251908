use clap::Parser;

use crate::entropy::Seed;
use crate::pass::charset::CharacterClass;
use crate::settings::{ClassSet, DEFAULT_LENGTH, GenerationConfig, IndexPolicy};

/// Generate passwords from selectable character classes.
///
/// Run without generation flags to open the interactive screen.
#[derive(Debug, Default, Parser)]
#[command(name = "passforge", version, about, long_about = None)]
pub struct CliFlags {
    /// Characters per password
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(8..=16))]
    pub length: Option<u8>,

    /// Include lowercase letters
    #[arg(short = 'L', long)]
    pub lower: bool,

    /// Include uppercase letters
    #[arg(short = 'U', long)]
    pub upper: bool,

    /// Include digits
    #[arg(short, long)]
    pub digits: bool,

    /// Include symbols
    #[arg(short, long)]
    pub symbols: bool,

    /// Include every character class
    #[arg(short, long)]
    pub all: bool,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub number: Option<u32>,

    /// Seed the generator for reproducible output
    #[arg(long, value_name = "SEED", env = "PASSFORGE_SEED")]
    pub seed: Option<u64>,

    /// Round draws to the nearest index; a draw that rounds past the end is dropped
    #[arg(long)]
    pub legacy_rounding: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Suppress all output except passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive screen with these settings
    #[arg(short, long)]
    pub interactive: bool,
}

impl CliFlags {
    /// Flags that ask for one-shot output instead of the screen.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.lower
            || self.upper
            || self.digits
            || self.symbols
            || self.all
            || self.board
    }

    pub fn wants_screen(&self) -> bool {
        self.interactive || !self.has_explicit_args()
    }

    /// Enabled classes: exactly the class flags given, or the default set.
    pub fn classes(&self) -> ClassSet {
        if self.all {
            return ClassSet::all();
        }

        let picked = [
            (self.lower, CharacterClass::Lowercase),
            (self.upper, CharacterClass::Uppercase),
            (self.digits, CharacterClass::Digit),
            (self.symbols, CharacterClass::Symbol),
        ];
        let classes: ClassSet = picked
            .into_iter()
            .filter_map(|(on, class)| on.then_some(class))
            .collect();

        if classes.is_empty() {
            ClassSet::default()
        } else {
            classes
        }
    }

    pub fn config(&self) -> GenerationConfig {
        let length = self.length.map_or(DEFAULT_LENGTH, usize::from);
        let policy = if self.legacy_rounding {
            IndexPolicy::Round
        } else {
            IndexPolicy::Floor
        };
        GenerationConfig::new(length, self.classes()).with_policy(policy)
    }

    pub fn count(&self) -> usize {
        self.number.map_or(1, |n| n as usize)
    }

    pub fn seed(&self) -> Seed {
        Seed::from_option(self.seed)
    }
}
