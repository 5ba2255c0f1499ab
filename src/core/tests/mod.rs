//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Chord and key-code parsing tests
//! - Slot table construction and resolution tests

#[cfg(test)]
mod slots_tests;
#[cfg(test)]
mod types_tests;
