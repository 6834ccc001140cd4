//! Character classes and the pool built from them.

use std::collections::BTreeSet;

use super::GenerationConfig;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

/// One of the four alphabets a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Alphabet of this class. The special alphabet comes from the config.
    pub fn alphabet(self, config: &GenerationConfig) -> Vec<char> {
        match self {
            CharClass::Lower => LOWERCASE.chars().collect(),
            CharClass::Upper => UPPERCASE.chars().collect(),
            CharClass::Digit => DIGITS.chars().collect(),
            CharClass::Special => config.special_chars(),
        }
    }

    /// Whether `c` belongs to this class for the given config.
    pub fn contains(self, config: &GenerationConfig, c: char) -> bool {
        match self {
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => config.special_charset.trim().contains(c),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lower => "lowercase",
            CharClass::Upper => "uppercase",
            CharClass::Digit => "digits",
            CharClass::Special => "special",
        }
    }
}

/// Union of the selected alphabets, used to fill non-guaranteed positions.
///
/// Duplicates in a custom special set are kept, so a repeated symbol is
/// proportionally more likely to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    pub fn build(config: &GenerationConfig) -> Self {
        let mut chars = Vec::new();
        for class in config.selected_classes() {
            chars.extend(class.alphabet(config));
        }
        CharacterPool(chars)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of different characters in the pool. Repeats in a custom set
    /// and symbols shared with another class count once.
    pub fn distinct_len(&self) -> usize {
        self.0.iter().collect::<BTreeSet<_>>().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_is_union_of_selected_classes() {
        let config = GenerationConfig {
            include_upper: false,
            special_charset: "!@#".into(),
            ..GenerationConfig::new(12)
        };
        let pool = CharacterPool::build(&config);
        assert_eq!(pool.len(), 26 + 10 + 3);
        assert!(pool.as_slice().contains(&'a'));
        assert!(pool.as_slice().contains(&'#'));
        assert!(!pool.as_slice().iter().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn distinct_len_ignores_repeats_and_overlap() {
        let repeated = GenerationConfig {
            include_lower: false,
            include_upper: false,
            include_digits: false,
            special_charset: "!!!!!!!!!!!!!!!!".into(),
            ..GenerationConfig::new(50)
        };
        let pool = CharacterPool::build(&repeated);
        assert_eq!(pool.len(), 16);
        assert_eq!(pool.distinct_len(), 1);

        let overlapping = GenerationConfig {
            special_charset: "a1!!".into(),
            ..GenerationConfig::new(12)
        };
        let pool = CharacterPool::build(&overlapping);
        assert_eq!(pool.len(), 26 + 26 + 10 + 4);
        assert_eq!(pool.distinct_len(), 26 + 26 + 10 + 1);
    }

    #[test]
    fn special_alphabet_is_trimmed() {
        let config = GenerationConfig {
            special_charset: "  !?  ".into(),
            ..GenerationConfig::new(8)
        };
        assert_eq!(CharClass::Special.alphabet(&config), vec!['!', '?']);
        assert!(CharClass::Special.contains(&config, '?'));
        assert!(!CharClass::Special.contains(&config, ' '));
    }

    #[test]
    fn empty_selection_gives_empty_pool() {
        let config = GenerationConfig {
            include_lower: false,
            include_upper: false,
            include_digits: false,
            include_special: false,
            ..GenerationConfig::new(8)
        };
        assert!(CharacterPool::build(&config).is_empty());
    }
}
