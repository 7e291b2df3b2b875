use thiserror::Error;

/// Core error type for the Pokemon Center
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A nurse could not heal a pokemon
    #[error("Healing failed: {0}")]
    HealingFailed(String),

    /// Invalid center configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for CoreError {
    fn from(err: String) -> Self {
        CoreError::Other(err)
    }
}

impl From<&str> for CoreError {
    fn from(err: &str) -> Self {
        CoreError::Other(err.to_string())
    }
}
