//! Testing utilities for the Pokemon Center.
//!
//! This crate provides standardized testing utilities for the Pokemon Center,
//! including a mockall mock of the `Nurse` collaborator, a recording fake nurse,
//! call assertions, test data generators and tracing setup.

pub mod assertions;
pub mod data_generators;
pub mod implementations;
pub mod mocks;
pub mod util;

/// Re-export commonly used types for convenience
pub use mockall;

pub use implementations::RecordingNurse;
pub use mocks::MockNurse;
