//! Nurse interface for the Pokemon Center
//!
//! The center never heals anything itself: every collected pokemon is handed
//! to a `Nurse`. External crates implement this trait, and any closure with the
//! right signature can stand in for one.

use super::pokemon::Pokemon;
use crate::CoreError;

/// Heals pokemon on behalf of the center
#[cfg_attr(test, mockall::automock)]
pub trait Nurse: Send + Sync {
    /// Heal the given pokemon, returning the healed result
    fn heal(&self, pokemon: Pokemon) -> Result<Pokemon, CoreError>;
}

impl<F> Nurse for F
where
    F: Fn(Pokemon) -> Result<Pokemon, CoreError> + Send + Sync,
{
    fn heal(&self, pokemon: Pokemon) -> Result<Pokemon, CoreError> {
        self(pokemon)
    }
}
