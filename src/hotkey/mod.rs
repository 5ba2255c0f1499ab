//! Global hotkey registration and dispatch.
//!
//! This module turns OS-level key events into slot activations:
//!
//! - **`HotkeyBackend`:** thin trait over the OS global-hotkey facility
//!   (bind a chord, unbind, poll the event source with a bounded timeout)
//! - **`GlobalHotkeyBackend`:** the real backend over the `global-hotkey`
//!   crate, which owns the platform message plumbing internally
//! - **`HotkeyRegistry`:** binds one chord per slot, runs the dispatch
//!   loop on its own thread, and releases registrations at shutdown
//!
//! Per-slot binding failures (chord owned by another process) disable that
//! slot only; the remaining slots register and dispatch normally.

mod backend;
mod registry;

use thiserror::Error;

pub use backend::{GlobalHotkeyBackend, HotkeyBackend, HotkeyEvent};
pub use registry::{HotkeyRegistry, RegistrationResult, POLL_INTERVAL};

/// Errors from the hotkey facility.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The OS hotkey manager could not be created at all.
    #[error("Hotkey backend unavailable: {0}")]
    Backend(String),
    /// A single chord could not be bound (typically already owned by
    /// another process). Non-fatal: only that slot is disabled.
    #[error("Failed to bind chord: {0}")]
    Bind(String),
    /// A chord uses a key name the facility cannot bind.
    #[error("Unknown key name: {0}")]
    UnknownKey(String),
}

#[cfg(test)]
mod tests;
