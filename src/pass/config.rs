//! Generation request.

use super::charset::CharClass;
use super::{MAX_LENGTH, MIN_LENGTH};
use crate::error::ConfigError;

/// Immutable input to the password builder, built once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_digits: bool,
    pub include_special: bool,
    /// Effective special set, already resolved from preset or custom input.
    pub special_charset: String,
}

impl GenerationConfig {
    /// All classes enabled with the default preset as special set.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            include_lower: true,
            include_upper: true,
            include_digits: true,
            include_special: true,
            special_charset: super::Preset::default().chars().to_string(),
        }
    }

    pub fn selected_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.is_selected(*class))
            .collect()
    }

    pub fn is_selected(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.include_lower,
            CharClass::Upper => self.include_upper,
            CharClass::Digit => self.include_digits,
            CharClass::Special => self.include_special,
        }
    }

    pub(crate) fn special_chars(&self) -> Vec<char> {
        self.special_charset.trim().chars().collect()
    }

    /// Check every rejection rule, in order, without drawing anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(ConfigError::InvalidLength(self.length.to_string()));
        }
        if self.selected_classes().is_empty() {
            return Err(ConfigError::NoCharacterClassSelected);
        }
        if self.include_special && self.special_charset.trim().is_empty() {
            return Err(ConfigError::EmptySpecialCharset);
        }
        Ok(())
    }
}

/// Parse a length typed by the user. Blank, non-numeric and out-of-range
/// input all map to `InvalidLength`.
pub fn parse_length(input: &str) -> Result<usize, ConfigError> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if (MIN_LENGTH..=MAX_LENGTH).contains(&n) => Ok(n),
        _ => Err(ConfigError::InvalidLength(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_length_bounds() {
        assert_eq!(parse_length("4"), Ok(4));
        assert_eq!(parse_length(" 50 "), Ok(50));
        assert_eq!(parse_length("3"), Err(ConfigError::InvalidLength("3".into())));
        assert_eq!(parse_length("51"), Err(ConfigError::InvalidLength("51".into())));
    }

    #[test]
    fn parse_length_rejects_garbage() {
        assert!(matches!(parse_length(""), Err(ConfigError::InvalidLength(_))));
        assert!(matches!(parse_length("twelve"), Err(ConfigError::InvalidLength(_))));
        assert!(matches!(parse_length("-8"), Err(ConfigError::InvalidLength(_))));
        assert!(matches!(parse_length("12.5"), Err(ConfigError::InvalidLength(_))));
    }

    #[test]
    fn validation_order() {
        let nothing = GenerationConfig {
            length: 2,
            include_lower: false,
            include_upper: false,
            include_digits: false,
            include_special: false,
            special_charset: String::new(),
        };
        // Length is checked before classes.
        assert_eq!(nothing.validate(), Err(ConfigError::InvalidLength("2".into())));

        let nothing = GenerationConfig { length: 10, ..nothing };
        assert_eq!(nothing.validate(), Err(ConfigError::NoCharacterClassSelected));

        let blank = GenerationConfig {
            include_special: true,
            special_charset: " \t ".into(),
            ..nothing
        };
        assert_eq!(blank.validate(), Err(ConfigError::EmptySpecialCharset));
    }

    #[test]
    fn blank_charset_ignored_when_special_off() {
        let config = GenerationConfig {
            include_special: false,
            special_charset: String::new(),
            ..GenerationConfig::new(8)
        };
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.selected_classes().len(), 3);
    }
}
