//! Assertion utilities for validating calls made to a nurse.

use crate::implementations::RecordingNurse;
use pokecenter_core::Pokemon;
use thiserror::Error;

/// Error type for nurse call validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NurseCallValidationError {
    #[error("Unexpected call count: expected {expected}, got {actual}")]
    CallCountMismatch { expected: usize, actual: usize },

    #[error("No call matched the predicate out of {calls} call(s)")]
    NoMatchingCall { calls: usize },

    #[error("Call order mismatch at position {position}: expected {expected}, got {actual}")]
    CallOrderMismatch {
        position: usize,
        expected: String,
        actual: String,
    },
}

/// Asserts that the nurse was called exactly `expected` times.
///
/// # Returns
///
/// * `Ok(())` - If the call count matches
/// * `Err(NurseCallValidationError)` - If it does not
pub fn assert_called_times(
    nurse: &RecordingNurse,
    expected: usize,
) -> Result<(), NurseCallValidationError> {
    let actual = nurse.call_count();

    if actual != expected {
        return Err(NurseCallValidationError::CallCountMismatch { expected, actual });
    }

    Ok(())
}

/// Asserts that the nurse was never called.
pub fn assert_never_called(nurse: &RecordingNurse) -> Result<(), NurseCallValidationError> {
    assert_called_times(nurse, 0)
}

/// Asserts that at least one call received a pokemon accepted by `predicate`.
pub fn assert_called_with<P>(
    nurse: &RecordingNurse,
    predicate: P,
) -> Result<(), NurseCallValidationError>
where
    P: Fn(&Pokemon) -> bool,
{
    if nurse.was_called_with(predicate) {
        return Ok(());
    }

    Err(NurseCallValidationError::NoMatchingCall {
        calls: nurse.call_count(),
    })
}

/// Asserts that the nurse received exactly `expected`, in that order.
pub fn assert_call_order(
    nurse: &RecordingNurse,
    expected: &[Pokemon],
) -> Result<(), NurseCallValidationError> {
    let calls = nurse.calls();

    assert_called_times(nurse, expected.len())?;

    for (position, (expected, actual)) in expected.iter().zip(calls.iter()).enumerate() {
        if expected != actual {
            return Err(NurseCallValidationError::CallOrderMismatch {
                position,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    Ok(())
}
