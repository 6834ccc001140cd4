//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pass::{MAX_LENGTH, MIN_LENGTH};

/// Rejections raised by the password builder before any random draw.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "password length must be an integer between {} and {}, got {:?}",
        MIN_LENGTH,
        MAX_LENGTH,
        .0
    )]
    InvalidLength(String),

    #[error("at least one character class must be selected")]
    NoCharacterClassSelected,

    #[error("special characters are enabled but the special character set is empty")]
    EmptySpecialCharset,

    #[error("length {length} cannot hold one character from each of {classes} selected classes")]
    LengthTooShortForSelectedClasses { length: usize, classes: usize },

    #[error("unknown special character preset: {0:?}")]
    UnknownPreset(String),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no password has been generated yet")]
    Empty,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("no password to save")]
    NothingToSave,

    #[error("failed to append to {}: {source}", path.display())]
    PersistenceWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything a CLI run can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Parse(#[from] crate::cli::ParseError),
}

impl Error {
    /// Process exit code: 2 for usage and configuration mistakes, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::Parse(_) => 2,
            _ => 1,
        }
    }
}
