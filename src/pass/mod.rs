//! Password construction.

pub mod charset;
mod config;
mod generate;
pub mod preset;

use std::fmt;

use zeroize::Zeroize;

pub use charset::{CharClass, CharacterPool};
pub use config::{GenerationConfig, parse_length};
pub use generate::{generate, generate_batch};
pub use preset::{Preset, SpecialMode};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 50;

/// A generated password. The backing memory is zeroed on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(s: String) -> Self {
        Password(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep passwords out of debug logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
