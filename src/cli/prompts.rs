//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::locale::{self, Lang};
use crate::pass::{CharacterPool, GenerationConfig};
use crate::terminal::{config_entropy, entropy_strength};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Errors are always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Entropy estimate on stderr so stdout stays pipeable.
pub fn strength(config: &GenerationConfig) {
    if !quiet::enabled() {
        let bits = config_entropy(config);
        let pool = CharacterPool::build(config).distinct_len();
        eprintln!("{:.1} bits ({}) from {pool} chars", bits, entropy_strength(bits));
    }
}

pub fn clipboard_copied(lang: Lang) {
    if !quiet::enabled() {
        println!("*** {} ***", locale::copied(lang));
    }
}

/// Ask whether to print instead when the clipboard can't be opened.
/// Non-interactive and quiet runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_saved(count: usize, path: &str, lang: Lang) {
    if !quiet::enabled() {
        eprintln!("{} ({count} \u{2192} {path})", locale::saved(lang));
    }
}
