//! Slot registration and the dispatch loop.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::slots::SlotTable;
use crate::core::types::SlotIndex;
use crate::hotkey::backend::HotkeyBackend;
use crate::hotkey::RegistryError;

/// Upper bound on how long the dispatch loop waits between stop-signal
/// checks. Shutdown latency never exceeds one interval.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Per-slot outcome of a registration pass.
#[derive(Debug)]
pub struct RegistrationResult {
    /// Slot this outcome belongs to.
    pub slot: SlotIndex,
    /// Native id on success, the binding failure otherwise.
    pub result: Result<u32, RegistryError>,
}

/// Registers slot chords with the OS and dispatches their activations.
///
/// The registry owns the backend and a table of successful registrations.
/// `run` is a blocking loop intended for a dedicated thread: the OS hotkey
/// facility must not share a thread with UI rendering or dialog modality.
pub struct HotkeyRegistry<B: HotkeyBackend> {
    backend: B,
    table: Arc<SlotTable>,
    /// Successfully bound chords: native id → slot. Events whose id is not
    /// here (failed slots, foreign registrations) are ignored.
    active: HashMap<u32, SlotIndex>,
}

impl<B: HotkeyBackend> HotkeyRegistry<B> {
    pub fn new(backend: B, table: Arc<SlotTable>) -> Self {
        Self {
            backend,
            table,
            active: HashMap::new(),
        }
    }

    /// Attempts to bind every slot's chord.
    ///
    /// Per-slot failures do not abort the remaining slots; each outcome is
    /// reported so the caller can surface disabled slots. Registering an
    /// empty table is a legal no-op.
    pub fn register(&mut self) -> Vec<RegistrationResult> {
        let table = Arc::clone(&self.table);
        let mut results = Vec::with_capacity(table.len());

        for slot in table.slots() {
            let result = self.backend.bind(&slot.chord);
            match &result {
                Ok(native_id) => {
                    self.active.insert(*native_id, slot.index);
                    tracing::info!(slot = slot.index, chord = %slot.chord, "hotkey registered");
                }
                Err(e) => {
                    tracing::warn!(slot = slot.index, chord = %slot.chord, error = %e,
                        "hotkey registration failed, slot disabled");
                }
            }
            results.push(RegistrationResult {
                slot: slot.index,
                result,
            });
        }

        results
    }

    /// Slots with a live registration, in table order.
    pub fn active_slots(&self) -> Vec<SlotIndex> {
        let mut slots: Vec<SlotIndex> = self.active.values().copied().collect();
        slots.sort_unstable();
        slots
    }

    /// Blocks in the dispatch loop until `stop` is set.
    ///
    /// Waits on the backend event source with [`POLL_INTERVAL`] as the
    /// bound, so the stop flag is observed promptly without busy-spinning.
    /// Pressed events for registered chords invoke `on_activate` with the
    /// slot index; releases, spurious wake-ups and events for unknown ids
    /// are ignored.
    pub fn run<F>(&mut self, stop: &AtomicBool, mut on_activate: F)
    where
        F: FnMut(SlotIndex),
    {
        while !stop.load(Ordering::SeqCst) {
            let Some(event) = self.backend.poll_event(POLL_INTERVAL) else {
                continue;
            };
            if !event.pressed {
                continue;
            }
            match self.active.get(&event.native_id) {
                Some(&slot) => on_activate(slot),
                None => {
                    tracing::trace!(native_id = event.native_id, "event for unregistered chord");
                }
            }
        }
        tracing::debug!("dispatch loop stopped");
    }

    /// Releases every held registration. Idempotent; safe to call after a
    /// partially failed `register`. Also runs on drop.
    pub fn shutdown(&mut self) {
        for (native_id, slot) in self.active.drain() {
            self.backend.unbind(native_id);
            tracing::debug!(slot, "hotkey released");
        }
    }

    /// Resolves a native id through the slot table (all configured slots,
    /// regardless of registration outcome).
    pub fn table(&self) -> &SlotTable {
        &self.table
    }
}

impl<B: HotkeyBackend> Drop for HotkeyRegistry<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
