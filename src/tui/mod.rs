//! Interactive TUI menus.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

/// Message shown under the current menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    None,
    Info(String),
    Error(String),
}

/// Run TUI interactive mode.
pub fn run() {
    gen_main_menu();
}
