//! Clipboard copy of the last generated password.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::ClipboardError;

/// Open the system clipboard.
pub fn system() -> Result<ClipboardContext, ClipboardError> {
    ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

/// Copy `text` to `ctx`. `None` means nothing has been generated yet.
pub fn copy<C: ClipboardProvider>(ctx: &mut C, text: Option<&str>) -> Result<(), ClipboardError> {
    let text = text.ok_or(ClipboardError::Empty)?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| ClipboardError::Write(e.to_string()))?;

    // Some providers keep a private copy of what was read back; wipe ours.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
