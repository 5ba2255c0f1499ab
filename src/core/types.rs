//! src/core/types.rs
//!
//! Core type definitions for chord and slot management
//!
//! This module defines the fundamental types used throughout the application:
//! - `Modifier`: Keyboard modifier keys (CTRL, SHIFT, ALT, SUPER)
//! - `Chord`: A combination of modifiers and a key, bindable as a global hotkey
//! - `SlotIndex`: Stable 1-based identity of a configured secret binding
//!
//! Chords are normalised at construction (sorted, deduplicated modifiers and
//! an uppercase key name) so that equal chords always compare and hash equal,
//! and are convertible to the OS-level hotkey representation used for
//! registration and event dispatch.

use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a configured secret binding.
///
/// Slot indices are 1-based and never change for the process lifetime;
/// the dispatch loop identifies activations by slot index only.
pub type SlotIndex = u8;

/// Keyboard modifier keys
///
/// Represents the four standard modifier keys usable in a chord.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Modifier {
    /// Control key
    Ctrl,
    /// Shift key
    Shift,
    /// Alt key
    Alt,
    /// Super/Windows/Command key
    Super,
}

impl Modifier {
    /// Maps this modifier to the OS hotkey modifier flag.
    fn to_flag(self) -> Modifiers {
        match self {
            Modifier::Ctrl => Modifiers::CONTROL,
            Modifier::Shift => Modifiers::SHIFT,
            Modifier::Alt => Modifiers::ALT,
            Modifier::Super => Modifiers::SUPER,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Ctrl => write!(f, "CTRL"),
            Modifier::Shift => write!(f, "SHIFT"),
            Modifier::Alt => write!(f, "ALT"),
            Modifier::Super => write!(f, "SUPER"),
        }
    }
}

/// Parses a key name into an OS key code.
///
/// Supports A-Z, 0-9, F1-F12 and a handful of named keys (SPACE, RETURN,
/// ESCAPE, TAB). Names are case-insensitive. Returns `None` for anything
/// the hotkey facility cannot bind.
pub fn parse_key_code(key_name: &str) -> Option<Code> {
    let upper = key_name.to_uppercase();
    match upper.as_str() {
        "SPACE" => Some(Code::Space),
        "RETURN" | "ENTER" => Some(Code::Enter),
        "ESCAPE" | "ESC" => Some(Code::Escape),
        "TAB" => Some(Code::Tab),
        s if s.len() == 1 => {
            let ch = s.chars().next()?;
            match ch {
                'A' => Some(Code::KeyA),
                'B' => Some(Code::KeyB),
                'C' => Some(Code::KeyC),
                'D' => Some(Code::KeyD),
                'E' => Some(Code::KeyE),
                'F' => Some(Code::KeyF),
                'G' => Some(Code::KeyG),
                'H' => Some(Code::KeyH),
                'I' => Some(Code::KeyI),
                'J' => Some(Code::KeyJ),
                'K' => Some(Code::KeyK),
                'L' => Some(Code::KeyL),
                'M' => Some(Code::KeyM),
                'N' => Some(Code::KeyN),
                'O' => Some(Code::KeyO),
                'P' => Some(Code::KeyP),
                'Q' => Some(Code::KeyQ),
                'R' => Some(Code::KeyR),
                'S' => Some(Code::KeyS),
                'T' => Some(Code::KeyT),
                'U' => Some(Code::KeyU),
                'V' => Some(Code::KeyV),
                'W' => Some(Code::KeyW),
                'X' => Some(Code::KeyX),
                'Y' => Some(Code::KeyY),
                'Z' => Some(Code::KeyZ),
                '0' => Some(Code::Digit0),
                '1' => Some(Code::Digit1),
                '2' => Some(Code::Digit2),
                '3' => Some(Code::Digit3),
                '4' => Some(Code::Digit4),
                '5' => Some(Code::Digit5),
                '6' => Some(Code::Digit6),
                '7' => Some(Code::Digit7),
                '8' => Some(Code::Digit8),
                '9' => Some(Code::Digit9),
                _ => None,
            }
        }
        s if s.starts_with('F') && s.len() <= 3 => match s {
            "F1" => Some(Code::F1),
            "F2" => Some(Code::F2),
            "F3" => Some(Code::F3),
            "F4" => Some(Code::F4),
            "F5" => Some(Code::F5),
            "F6" => Some(Code::F6),
            "F7" => Some(Code::F7),
            "F8" => Some(Code::F8),
            "F9" => Some(Code::F9),
            "F10" => Some(Code::F10),
            "F11" => Some(Code::F11),
            "F12" => Some(Code::F12),
            _ => None,
        },
        _ => None,
    }
}

/// A combination of modifier keys and a base key
///
/// Represents a complete global-hotkey chord like CTRL+SHIFT+Z.
/// Implements Hash and Eq for duplicate detection across slots.
///
/// # Normalisation
/// `Chord::new` sorts and deduplicates the modifiers and uppercases the key
/// name, so different orderings of the same chord compare equal
/// (e.g. CTRL+SHIFT+Z and SHIFT+CTRL+z are identical).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Chord {
    /// Modifier keys (CTRL, SHIFT, ALT, SUPER)
    pub modifiers: Vec<Modifier>,

    /// Base key name (e.g. "Z", "1", "F5")
    /// Always stored in uppercase for consistent hashing
    pub key: String,
}

impl Chord {
    /// Create a new Chord with normalised data.
    pub fn new(mut modifiers: Vec<Modifier>, key: &str) -> Self {
        // Sort modifiers for consistent hashing
        modifiers.sort_by_key(|m| format!("{:?}", m));

        // Remove duplicates
        modifiers.dedup();

        Self {
            modifiers,
            key: key.to_uppercase(),
        }
    }

    /// Converts this chord to the OS hotkey representation.
    ///
    /// Returns `None` when the key name is not bindable.
    pub fn to_hotkey(&self) -> Option<HotKey> {
        let code = parse_key_code(&self.key)?;
        if self.modifiers.is_empty() {
            return Some(HotKey::new(None, code));
        }
        let flags = self
            .modifiers
            .iter()
            .fold(Modifiers::empty(), |acc, m| acc | m.to_flag());
        Some(HotKey::new(Some(flags), code))
    }

    /// The native hotkey identifier for this chord.
    ///
    /// The identifier is a pure function of the chord, so it can be computed
    /// before registration and used to resolve dispatch events back to slots.
    pub fn native_id(&self) -> Option<u32> {
        self.to_hotkey().map(|hotkey| hotkey.id())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            let mods = self
                .modifiers
                .iter()
                .map(|m| format!("{}", m))
                .collect::<Vec<_>>()
                .join("+");
            write!(f, "{}+{}", mods, self.key)
        }
    }
}
