//! Character set building for password generation.

use crate::settings::ClassSet;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcedfgjo";
const DIGITS: &str = "123456789";
const SYMBOLS: &str = "!@#$%^&*()_+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Order in which enabled alphabets are concatenated.
    pub const CANONICAL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lowercase Letters",
            CharacterClass::Uppercase => "Include Uppercase Letters",
            CharacterClass::Digit => "Include Numbers",
            CharacterClass::Symbol => "Include Symbols",
        }
    }
}

/// Build the combined alphabet for the enabled classes.
pub fn build(classes: &ClassSet) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    for class in classes.iter() {
        chars.extend(class.alphabet().chars());
    }

    chars
}

/// Size of the combined alphabet.
pub fn size(classes: &ClassSet) -> usize {
    classes.iter().map(|c| c.alphabet().chars().count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_fixed() {
        assert_eq!(CharacterClass::Lowercase.alphabet(), "abcedfgjo");
        assert_eq!(CharacterClass::Digit.alphabet(), "123456789");
        assert_eq!(CharacterClass::Symbol.alphabet(), "!@#$%^&*()_+");
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
    }

    #[test]
    fn build_concatenates_in_canonical_order() {
        let chars: String = build(&ClassSet::all()).into_iter().collect();
        assert_eq!(
            chars,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcedfgjo123456789!@#$%^&*()_+"
        );
    }

    #[test]
    fn build_ignores_toggle_order() {
        let mut classes = ClassSet::none();
        classes.set(CharacterClass::Symbol, true);
        classes.set(CharacterClass::Lowercase, true);
        let chars: String = build(&classes).into_iter().collect();
        assert_eq!(chars, "abcedfgjo!@#$%^&*()_+");
    }

    #[test]
    fn empty_set_builds_empty_alphabet() {
        assert!(build(&ClassSet::none()).is_empty());
        assert_eq!(size(&ClassSet::none()), 0);
    }

    #[test]
    fn size_matches_build() {
        let classes = ClassSet::all();
        assert_eq!(size(&classes), build(&classes).len());
        assert_eq!(size(&classes), 56);
    }
}
