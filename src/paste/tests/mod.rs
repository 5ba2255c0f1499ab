//! Paste module tests
//!
//! Contains test suites for the paste pipeline:
//! - Clear timer arming, re-arming and cancellation tests
//! - Controller sequence tests against fake collaborators

#[cfg(test)]
mod controller_tests;
