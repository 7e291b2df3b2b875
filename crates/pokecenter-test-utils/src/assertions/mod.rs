//! Assertion utilities for verifying nurse interactions.
//!
//! These helpers work on a `RecordingNurse` and report mismatches as errors,
//! making tests more concise and readable.

mod nurse_calls;

// Re-export all assertion helpers for easy access
pub use nurse_calls::*;
