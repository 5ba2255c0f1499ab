//! Hotkey module tests
//!
//! Registry tests run against a scripted fake backend; the real
//! `GlobalHotkeyBackend` needs a display session and is exercised manually.
