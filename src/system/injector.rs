//! Paste keystroke synthesis via `enigo`.

use enigo::{Direction, Enigo, Key, Keyboard, Settings};

use crate::paste::{PasteError, PasteInjector};

/// The modifier the platform pairs with V for paste.
#[cfg(target_os = "macos")]
const PASTE_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const PASTE_MODIFIER: Key = Key::Control;

/// Injects the modifier-down, V-down, V-up, modifier-up sequence into
/// whichever window currently has focus.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnigoInjector;

impl PasteInjector for EnigoInjector {
    fn send_paste(&self) -> Result<(), PasteError> {
        let mut enigo =
            Enigo::new(&Settings::default()).map_err(|e| PasteError::Injection(e.to_string()))?;

        enigo
            .key(PASTE_MODIFIER, Direction::Press)
            .map_err(|e| PasteError::Injection(e.to_string()))?;

        let result = enigo
            .key(Key::Unicode('v'), Direction::Press)
            .and_then(|()| enigo.key(Key::Unicode('v'), Direction::Release));

        // Release the modifier even when the V events failed, so a failed
        // injection cannot leave CTRL logically held down.
        let released = enigo.key(PASTE_MODIFIER, Direction::Release);

        result
            .and(released)
            .map_err(|e| PasteError::Injection(e.to_string()))
    }
}
