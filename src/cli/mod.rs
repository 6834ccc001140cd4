//! Flag-driven mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::locale::{Lang, Localized};

/// Run CLI mode and return the process exit code.
pub fn run(args: &[String]) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.localized(Lang::En));
            prompts::error("Try 'passnote --help' for usage.");
            return e.exit_code();
        }
    };

    match ctx.run() {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&e.localized(ctx.settings.lang));
            e.exit_code()
        }
    }
}
