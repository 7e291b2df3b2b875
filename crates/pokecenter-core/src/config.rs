use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Largest number of queue slots a center may allocate up front
pub const MAX_INITIAL_CAPACITY: usize = 1 << 16;

/// Configuration of a `PokemonCenter`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterConfig {
    /// Label attached to every log event emitted by the center
    pub name: String,

    /// Number of queue slots allocated up front, at most `MAX_INITIAL_CAPACITY`
    pub initial_capacity: usize,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            name: "pokemon-center".to_string(),
            initial_capacity: 16,
        }
    }
}

impl CenterConfig {
    /// Create a configuration with the given name and default values otherwise
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Check that the configuration can be used to build a center
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigurationError(
                "center name must not be empty".to_string(),
            ));
        }

        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(CoreError::ConfigurationError(format!(
                "initial capacity {} exceeds the maximum of {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }

        Ok(())
    }
}
