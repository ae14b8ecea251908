//! Password generation settings.

use crate::pass::charset::CharacterClass;

/// Shortest length the screen offers.
pub const MIN_LENGTH: usize = 8;
/// Longest length the screen offers.
pub const MAX_LENGTH: usize = 16;
pub const DEFAULT_LENGTH: usize = 10;

/// How a uniform draw in `[0, 1)` is turned into an alphabet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// `floor(u * n)`, always a valid index.
    #[default]
    Floor,
    /// `round(u * n)`. A draw that rounds up to `n` contributes no character,
    /// so the output can come out one short.
    Round,
}

/// The enabled character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl ClassSet {
    pub const fn none() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn only(class: CharacterClass) -> Self {
        let mut set = Self::none();
        set.set(class, true);
        set
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Symbol => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Digit => self.digits = enabled,
            CharacterClass::Symbol => self.symbols = enabled,
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.set(class, !self.contains(class));
    }

    pub fn is_empty(&self) -> bool {
        !(self.lowercase || self.uppercase || self.digits || self.symbols)
    }

    /// Enabled classes in canonical concatenation order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::CANONICAL
            .into_iter()
            .filter(|class| self.contains(*class))
    }
}

impl Default for ClassSet {
    fn default() -> Self {
        Self::only(CharacterClass::Lowercase)
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = Self::none();
        for class in iter {
            set.set(class, true);
        }
        set
    }
}

/// Everything one generation call needs besides the random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassSet,
    pub index_policy: IndexPolicy,
}

impl GenerationConfig {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self {
            length,
            classes,
            index_policy: IndexPolicy::default(),
        }
    }

    pub fn with_policy(mut self, index_policy: IndexPolicy) -> Self {
        self.index_policy = index_policy;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, ClassSet::default())
    }
}

/// Snap a continuous slider value to an integer length inside the screen range.
pub fn snap_length(value: f64) -> usize {
    if value.is_nan() {
        return DEFAULT_LENGTH;
    }
    let clamped = value.round().clamp(MIN_LENGTH as f64, MAX_LENGTH as f64);
    clamped as usize
}
