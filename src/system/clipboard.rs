//! System clipboard via `arboard`.

use crate::paste::{Clipboard, PasteError};

/// Writes through a fresh clipboard handle per call.
///
/// `arboard` handles are cheap to open and not `Sync`, so holding one across
/// threads would force a lock around every access; a per-call handle keeps
/// the trait object freely shareable between the paste path and the clear
/// timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), PasteError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PasteError::ClipboardWrite(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| PasteError::ClipboardWrite(e.to_string()))
    }
}
