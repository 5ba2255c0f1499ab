//! Real OS collaborators for the paste pipeline.
//!
//! Production implementations of the `paste` module's trait seams:
//! - **`SystemClipboard`:** text clipboard via `arboard`
//! - **`EnigoInjector`:** synthetic paste keystroke via `enigo`
//!
//! Both require a desktop session; tests use the fakes in `paste::tests`.

mod clipboard;
mod injector;

pub use clipboard::SystemClipboard;
pub use injector::EnigoInjector;
