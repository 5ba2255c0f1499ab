//! Backend abstraction over the OS global-hotkey facility.

use std::collections::HashMap;
use std::time::Duration;

use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};

use crate::core::types::Chord;
use crate::hotkey::RegistryError;

/// One event from the hotkey facility's event source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HotkeyEvent {
    /// Native identifier of the chord that triggered.
    pub native_id: u32,
    /// True for key-down; releases are delivered too and must be filtered.
    pub pressed: bool,
}

/// OS global-hotkey facility.
///
/// A trait seam so the registry's dispatch loop can be driven by a scripted
/// fake in tests. The real implementation is [`GlobalHotkeyBackend`].
pub trait HotkeyBackend {
    /// Binds a chord, returning its native identifier.
    fn bind(&mut self, chord: &Chord) -> Result<u32, RegistryError>;

    /// Releases a previously bound chord. Unknown ids are ignored.
    fn unbind(&mut self, native_id: u32);

    /// Waits up to `timeout` for the next event.
    ///
    /// Returning `None` on timeout (or on a spurious wake-up with no
    /// pending event) is normal; the caller re-checks its stop signal and
    /// polls again.
    fn poll_event(&mut self, timeout: Duration) -> Option<HotkeyEvent>;
}

/// Real backend over the `global-hotkey` crate.
///
/// The crate drains and dispatches unrelated platform messages on its own
/// internal plumbing; this wrapper only adds bookkeeping so chords can be
/// unregistered by native id.
pub struct GlobalHotkeyBackend {
    manager: GlobalHotKeyManager,
    held: HashMap<u32, HotKey>,
}

impl GlobalHotkeyBackend {
    /// Creates the OS hotkey manager.
    ///
    /// Must be called on the thread that will run the dispatch loop; some
    /// platforms tie hotkey delivery to the registering thread.
    pub fn new() -> Result<Self, RegistryError> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| RegistryError::Backend(e.to_string()))?;
        Ok(Self {
            manager,
            held: HashMap::new(),
        })
    }
}

impl HotkeyBackend for GlobalHotkeyBackend {
    fn bind(&mut self, chord: &Chord) -> Result<u32, RegistryError> {
        let hotkey = chord
            .to_hotkey()
            .ok_or_else(|| RegistryError::UnknownKey(chord.key.clone()))?;

        self.manager
            .register(hotkey)
            .map_err(|e| RegistryError::Bind(e.to_string()))?;

        let native_id = hotkey.id();
        self.held.insert(native_id, hotkey);
        Ok(native_id)
    }

    fn unbind(&mut self, native_id: u32) {
        if let Some(hotkey) = self.held.remove(&native_id) {
            if let Err(e) = self.manager.unregister(hotkey) {
                tracing::warn!(native_id, error = %e, "failed to unregister hotkey");
            }
        }
    }

    fn poll_event(&mut self, timeout: Duration) -> Option<HotkeyEvent> {
        match GlobalHotKeyEvent::receiver().recv_timeout(timeout) {
            Ok(event) => Some(HotkeyEvent {
                native_id: event.id(),
                pressed: event.state() == HotKeyState::Pressed,
            }),
            Err(_) => None,
        }
    }
}
