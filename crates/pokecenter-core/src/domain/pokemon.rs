use serde::{Deserialize, Serialize};
use std::fmt;

/// Value object: a pokemon waiting at (or leaving) the center
///
/// Two pokemon are equal when their names have the same content and their
/// health is the same; identity plays no part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pokemon {
    name: String,
    hp: i32,
}

impl Pokemon {
    /// Create a new pokemon
    pub fn new(name: impl Into<String>, hp: i32) -> Self {
        Self {
            name: name.into(),
            hp,
        }
    }

    /// Name of the pokemon
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the pokemon
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Current health points
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Change the health points
    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp;
    }

    /// Deep copy: the returned pokemon owns its own name buffer.
    pub fn copy(&self) -> Self {
        Self {
            name: self.name.as_str().to_owned(),
            hp: self.hp,
        }
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} HP)", self.name, self.hp)
    }
}
