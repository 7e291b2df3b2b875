/// Pokemon value object
pub mod pokemon;

/// Nurse collaborator interface
pub mod nurse;
