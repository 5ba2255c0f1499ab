// Copyright 2025 quickpaste developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures for slot and chord
//! management, including:
//! - Type definitions for chords and slot identities
//! - The immutable slot table with O(1) native-id resolution
//! - Runtime settings with compiled defaults
//!
//! All core logic is isolated from OS and I/O concerns to enable
//! comprehensive unit testing without hotkey, clipboard or vault access.

pub mod settings;
pub mod slots;
pub mod types;

pub use settings::Settings;
pub use slots::{Slot, SlotError, SlotTable, DEFAULT_CHORD_KEYS, MAX_SLOTS};
pub use types::{parse_key_code, Chord, Modifier, SlotIndex};

#[cfg(test)]
mod tests;
