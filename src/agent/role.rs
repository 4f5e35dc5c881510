//! Agent roles.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// The two sides of the experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Inmate
    Prisoner,
    /// Officer
    Guard,
}

impl Role {
    /// Lowercase role name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Prisoner => "prisoner",
            Role::Guard => "guard",
        }
    }

    /// Capitalized prefix used for generated agent names
    pub fn title(&self) -> &'static str {
        match self {
            Role::Prisoner => "Prisoner",
            Role::Guard => "Guard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = SimError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prisoner" => Ok(Self::Prisoner),
            "guard" => Ok(Self::Guard),
            _ => Err(SimError::UnknownRole(s.to_string())),
        }
    }
}
