//! Paste pipeline: copy, inject, delayed scrub.
//!
//! This module consumes slot activations and drives the
//! clipboard-write → settle → paste-keystroke → arm-clear sequence:
//!
//! - **`PasteController`:** fetches the secret and runs the sequence
//! - **`ClearTimer`:** single re-armable deferred clear with stale detection
//!
//! The clipboard and keystroke collaborators sit behind traits so the whole
//! pipeline runs against in-process fakes in tests. Real implementations
//! live in the `system` module.

mod controller;
mod timer;

use thiserror::Error;

pub use controller::{Activation, PasteController};
pub use timer::{ClearTimer, TimerAction};

use crate::core::types::SlotIndex;

/// Errors that abort a single activation.
///
/// None of these are fatal: the controller stays usable and the next
/// activation starts from a clean state.
#[derive(Debug, Error)]
pub enum PasteError {
    /// Writing to the OS clipboard failed.
    #[error("Clipboard write failed: {0}")]
    ClipboardWrite(String),
    /// Synthesizing the paste keystroke failed.
    #[error("Keystroke injection failed: {0}")]
    Injection(String),
    /// Activation named a slot the table does not contain.
    #[error("Unknown slot: {0}")]
    UnknownSlot(SlotIndex),
}

/// Text clipboard collaborator.
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard content with `text`.
    fn write(&self, text: &str) -> Result<(), PasteError>;

    /// Scrubs the clipboard, defined as writing empty text.
    fn clear(&self) -> Result<(), PasteError> {
        self.write("")
    }
}

/// Input-injection collaborator.
///
/// Emits the modifier-down, paste-key-down, paste-key-up, modifier-up
/// sequence targeting whichever window currently has focus.
pub trait PasteInjector: Send + Sync {
    fn send_paste(&self) -> Result<(), PasteError>;
}

#[cfg(test)]
mod tests;
