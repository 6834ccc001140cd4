//! Persistent form state for the TUI and `--saved` CLI runs.

mod file;

use std::path::PathBuf;

use crate::entropy::Source;
use crate::locale::Lang;
use crate::pass::{GenerationConfig, Preset, SpecialMode};
use crate::record::DEFAULT_LOG_PATH;

pub use file::{default_path, load_from, save_to};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub special_mode: SpecialMode,
    pub preset: Preset,
    pub custom_special: String,
    pub log_path: String,
    pub entropy: Source,
    pub lang: Lang,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        load_from(&default_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        save_to(self, &default_path())
    }

    /// Resolve the special-character mode and freeze the form into a
    /// generation request.
    pub fn to_config(&self) -> GenerationConfig {
        let special_charset = match self.special_mode {
            SpecialMode::Preset => self.preset.chars().to_string(),
            SpecialMode::Custom => self.custom_special.trim().to_string(),
        };
        GenerationConfig {
            length: self.pass_length,
            include_lower: self.include_lower,
            include_upper: self.include_upper,
            include_digits: self.include_digits,
            include_special: self.include_special,
            special_charset,
        }
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.log_path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            number_of_passwords: 1,
            include_lower: true,
            include_upper: true,
            include_digits: true,
            include_special: true,
            special_mode: SpecialMode::Preset,
            preset: Preset::Common,
            custom_special: String::new(),
            log_path: DEFAULT_LOG_PATH.to_string(),
            entropy: Source::Os,
            lang: Lang::En,
        }
    }
}
