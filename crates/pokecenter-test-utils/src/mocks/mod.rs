//! Mock implementations of the Pokemon Center interfaces.
//!
//! These mocks let tests state expectations on the `Nurse` collaborator
//! (invocation counts, argument predicates, call order) with mockall.

pub mod nurse;

// Re-export all mocks and their creator functions for easy access
pub use nurse::*;
