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

//! QuickPaste
//!
//! Binds short secrets (passwords, snippets) to global keyboard chords so
//! that pressing a chord pastes the secret into whichever application has
//! focus, then scrubs the clipboard after a short delay.
//!
//! # Features
//!
//! - **Global hotkeys:** up to seven CTRL+SHIFT chords, one per secret slot
//! - **Secure storage:** secrets live in the OS keystore, never on disk
//! - **Clipboard scrubbing:** a single re-armable timer clears the clipboard
//!   after the last paste; rapid repeats never scrub a newer secret
//! - **Per-slot degradation:** a chord owned by another process disables
//!   that slot only
//!
//! # Architecture
//!
//! - **`core`:** chords, the immutable slot table, runtime settings
//! - **`hotkey`:** OS hotkey registration and the dispatch loop
//! - **`paste`:** the copy → inject → delayed-scrub pipeline
//! - **`vault`:** keystore-backed secret storage behind a trait
//! - **`system`:** real clipboard and keystroke-injection collaborators
//!
//! # Concurrency
//!
//! The dispatch loop runs on its own thread and forwards slot activations
//! over a channel; the clear timer runs its deferred scrub on a dedicated
//! worker so a slow clear never delays hotkey responsiveness. Nothing in
//! the core is fatal: the loop exits only on an explicit stop signal.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use quickpaste::core::{Settings, SlotTable};
//! use quickpaste::paste::PasteController;
//! use quickpaste::system::{EnigoInjector, SystemClipboard};
//! use quickpaste::vault::KeyringVault;
//!
//! let settings = Settings::default();
//! let table = Arc::new(SlotTable::with_count(settings.slot_count)?);
//! let controller = PasteController::new(
//!     table,
//!     Arc::new(KeyringVault::default()),
//!     Arc::new(SystemClipboard),
//!     Arc::new(EnigoInjector),
//!     &settings,
//! );
//! controller.activate(1)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod hotkey;
pub mod paste;
pub mod system;
pub mod vault;

// Re-export commonly used types for convenience
pub use self::core::{Chord, Modifier, Settings, Slot, SlotIndex, SlotTable};
