//!
//! Pokecenter Core - the holding queue of the Pokemon Center
//!
//! This crate defines the domain model (`Pokemon`, the `Nurse` collaborator)
//! and the `PokemonCenter` service that queues pokemon and hands each one to
//! the injected nurse when it is collected.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - value objects and collaborator interfaces
pub mod domain;

/// Application services - the holding queue
pub mod application;

/// Center configuration
pub mod config;

/// Error types
pub mod error;

// Re-export main API types for easy use
pub use application::pokemon_center::PokemonCenter;
pub use config::CenterConfig;
pub use domain::nurse::Nurse;
pub use domain::pokemon::Pokemon;
pub use error::CoreError;
