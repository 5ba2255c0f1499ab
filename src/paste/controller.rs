//! Activation handling: vault fetch, clipboard write, keystroke, clear arm.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::core::settings::Settings;
use crate::core::slots::SlotTable;
use crate::core::types::SlotIndex;
use crate::paste::timer::ClearTimer;
use crate::paste::{Clipboard, PasteError, PasteInjector};
use crate::vault::SecretVault;

/// Outcome of a completed (non-failed) activation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Activation {
    /// Secret was copied and the paste keystroke injected.
    Pasted,
    /// No secret is set for the slot; nothing was touched.
    SecretAbsent,
}

/// Consumes slot activations and drives the paste sequence.
///
/// One controller serves all slots; only one paste sequence is logically
/// "most recent", so the controller owns a single re-armable [`ClearTimer`]
/// rather than one timer per slot. The sequence for a set secret is:
///
/// 1. write the secret to the clipboard
/// 2. sleep the settle delay so other processes observe the new content
/// 3. inject the paste keystroke into the focused window
/// 4. (re)arm the deferred clipboard scrub
///
/// Failures abort the current activation only; no timer is armed by a
/// failed sequence and the controller remains usable.
pub struct PasteController {
    table: Arc<SlotTable>,
    vault: Arc<dyn SecretVault>,
    clipboard: Arc<dyn Clipboard>,
    injector: Arc<dyn PasteInjector>,
    settle_delay: Duration,
    /// None when `clear_after` is zero: scrubbing disabled.
    timer: Option<ClearTimer>,
}

impl PasteController {
    /// Builds a controller over injected collaborators.
    ///
    /// A zero `clear_after` in `settings` disables the clear timer entirely;
    /// the clipboard then keeps the last pasted secret until something else
    /// replaces it.
    pub fn new(
        table: Arc<SlotTable>,
        vault: Arc<dyn SecretVault>,
        clipboard: Arc<dyn Clipboard>,
        injector: Arc<dyn PasteInjector>,
        settings: &Settings,
    ) -> Self {
        let timer = (!settings.clear_after.is_zero()).then(|| {
            let clip = Arc::clone(&clipboard);
            ClearTimer::new(
                settings.clear_after,
                Box::new(move || {
                    if let Err(e) = clip.clear() {
                        tracing::warn!(error = %e, "deferred clipboard clear failed");
                    }
                }),
            )
        });

        Self {
            table,
            vault,
            clipboard,
            injector,
            settle_delay: settings.settle_delay,
            timer,
        }
    }

    /// Runs the paste sequence for one slot activation.
    ///
    /// An absent or empty vault secret is a quiet no-op (`SecretAbsent`):
    /// no clipboard write, no injection, no timer side effects. A vault
    /// failure is logged and treated the same way. Clipboard or injection
    /// failures return an error and leave no timer armed.
    pub fn activate(&self, slot: SlotIndex) -> Result<Activation, PasteError> {
        let vault_key = self
            .table
            .vault_key_of(slot)
            .ok_or(PasteError::UnknownSlot(slot))?;

        let secret = match self.vault.get(vault_key) {
            Ok(Some(secret)) if !secret.is_empty() => secret,
            Ok(_) => {
                tracing::info!(slot, "no secret set for slot");
                return Ok(Activation::SecretAbsent);
            }
            Err(e) => {
                tracing::warn!(slot, error = %e, "vault unavailable, treating secret as absent");
                return Ok(Activation::SecretAbsent);
            }
        };

        self.clipboard.write(&secret)?;

        // Let the OS clipboard become observable to the focused application
        // before the paste keystroke lands.
        thread::sleep(self.settle_delay);

        self.injector.send_paste()?;

        if let Some(timer) = &self.timer {
            let generation = timer.arm();
            tracing::debug!(slot, generation, "clear timer armed");
        }

        Ok(Activation::Pasted)
    }

    /// Abandons any pending clipboard scrub without executing it.
    ///
    /// Used at shutdown; the clipboard is deliberately not purged here.
    pub fn cancel_pending_clear(&self) {
        if let Some(timer) = &self.timer {
            timer.cancel();
        }
    }
}
