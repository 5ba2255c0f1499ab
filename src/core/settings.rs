//! Runtime behaviour settings
//!
//! Tunables for the paste pipeline, built from CLI flags with compiled
//! defaults. The defaults mirror the reference deployment: three slots,
//! clipboard scrubbed five seconds after a paste, 50 ms clipboard settle
//! delay before the paste keystroke is injected.

use std::time::Duration;

/// Default number of configured slots.
pub const DEFAULT_SLOT_COUNT: u8 = 3;

/// Default delay before the clipboard is scrubbed after a paste.
pub const DEFAULT_CLEAR_AFTER: Duration = Duration::from_secs(5);

/// Default pause between the clipboard write and the paste keystroke,
/// letting other processes observe the new clipboard content.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Runtime settings for the hotkey daemon.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Number of slots to register (1..=7).
    pub slot_count: u8,

    /// How long after a paste the clipboard is scrubbed.
    /// A zero duration disables clearing entirely.
    pub clear_after: Duration,

    /// Settle delay between clipboard write and paste keystroke.
    pub settle_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            clear_after: DEFAULT_CLEAR_AFTER,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}
