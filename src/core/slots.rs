//! Slot table construction and native-id resolution
//!
//! A `SlotTable` is the immutable mapping at the heart of dispatch: it is
//! built once at startup from the configured slot count, assigns each slot
//! its chord and vault key name, and resolves native hotkey identifiers back
//! to slot indices in O(1).
//!
//! The default chord list pairs CTRL+SHIFT with Z, X, 1, 2, 3, 4, 5 in that
//! order, giving up to seven distinct chords. Vault keys are named
//! `str1..strN`, matching the entry names the configuration UI writes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{Chord, Modifier, SlotIndex};

/// Keys paired with CTRL+SHIFT to form the default chords, in slot order.
pub const DEFAULT_CHORD_KEYS: [&str; 7] = ["Z", "X", "1", "2", "3", "4", "5"];

/// Maximum number of configurable slots.
pub const MAX_SLOTS: u8 = 7;

/// Errors that can occur while building a slot table.
#[derive(Debug, Error)]
pub enum SlotError {
    /// Requested slot count is outside 1..=7.
    #[error("Invalid slot count: {0} (expected 1..=7)")]
    InvalidCount(u8),
    /// Two slots share the same chord.
    #[error("Duplicate chord across slots: {0}")]
    DuplicateChord(String),
    /// A chord uses a key name the hotkey facility cannot bind.
    #[error("Unknown key name: {0}")]
    UnknownKey(String),
}

/// One configured secret binding.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Slot {
    /// Stable 1-based slot identity.
    pub index: SlotIndex,

    /// The chord that activates this slot.
    pub chord: Chord,

    /// Vault entry name holding this slot's secret.
    pub vault_key: String,
}

/// Immutable slot table built once from configuration.
///
/// Maps native hotkey identifiers to slot indices for the dispatch loop and
/// exposes per-slot chord and vault-key lookups for registration and paste.
/// Never mutated after construction.
#[derive(Debug)]
pub struct SlotTable {
    slots: Vec<Slot>,
    by_native_id: HashMap<u32, SlotIndex>,
}

impl SlotTable {
    /// Builds a table of `count` slots using the default chord list.
    ///
    /// Slot `n` binds CTRL+SHIFT+`DEFAULT_CHORD_KEYS[n-1]` and reads its
    /// secret from vault key `str{n}`.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::InvalidCount` when `count` is 0 or above
    /// `MAX_SLOTS`.
    pub fn with_count(count: u8) -> Result<Self, SlotError> {
        if count == 0 || count > MAX_SLOTS {
            return Err(SlotError::InvalidCount(count));
        }

        let slots = (1..=count)
            .map(|n| Slot {
                index: n,
                chord: Chord::new(
                    vec![Modifier::Ctrl, Modifier::Shift],
                    DEFAULT_CHORD_KEYS[usize::from(n) - 1],
                ),
                vault_key: format!("str{}", n),
            })
            .collect();

        Self::new(slots)
    }

    /// Builds a table from explicit slots.
    ///
    /// An empty slot list is legal and yields a table that registers nothing.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::UnknownKey` when a chord's key name is not
    /// bindable, and `SlotError::DuplicateChord` when two slots map to the
    /// same native identifier.
    pub fn new(slots: Vec<Slot>) -> Result<Self, SlotError> {
        let mut by_native_id = HashMap::with_capacity(slots.len());

        for slot in &slots {
            let native_id = slot
                .chord
                .native_id()
                .ok_or_else(|| SlotError::UnknownKey(slot.chord.key.clone()))?;

            if by_native_id.insert(native_id, slot.index).is_some() {
                return Err(SlotError::DuplicateChord(slot.chord.to_string()));
            }
        }

        Ok(Self {
            slots,
            by_native_id,
        })
    }

    /// Resolves a native hotkey identifier to its slot index.
    pub fn resolve(&self, native_id: u32) -> Option<SlotIndex> {
        self.by_native_id.get(&native_id).copied()
    }

    /// Returns the chord bound to a slot.
    pub fn chord_of(&self, slot: SlotIndex) -> Option<&Chord> {
        self.slot(slot).map(|s| &s.chord)
    }

    /// Returns the vault key name a slot reads its secret from.
    pub fn vault_key_of(&self, slot: SlotIndex) -> Option<&str> {
        self.slot(slot).map(|s| s.vault_key.as_str())
    }

    /// All configured slots, in index order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of configured slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slots are configured.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot(&self, slot: SlotIndex) -> Option<&Slot> {
        self.slots.iter().find(|s| s.index == slot)
    }
}
