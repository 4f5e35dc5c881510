//! Persona generation.
//!
//! A persona is four independently sampled traits, each drawn uniformly from
//! a small fixed domain:
//!
//! | Trait         | Domain                                  |
//! |---------------|-----------------------------------------|
//! | temperament   | calm, aggressive, nervous, confident    |
//! | assertiveness | low, medium, high                       |
//! | empathy       | low, medium, high                       |
//! | compliance    | low, medium, high                       |
//!
//! The biography text built from a persona lives in [`tables`].

pub mod tables;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use tables::biography;

/// Temperament trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperament {
    /// Level-headed
    Calm,
    /// Confrontational
    Aggressive,
    /// Anxious
    Nervous,
    /// Self-assured
    Confident,
}

impl Temperament {
    /// Every temperament value
    pub const ALL: [Temperament; 4] = [
        Temperament::Calm,
        Temperament::Aggressive,
        Temperament::Nervous,
        Temperament::Confident,
    ];

    /// Lowercase trait value
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperament::Calm => "calm",
            Temperament::Aggressive => "aggressive",
            Temperament::Nervous => "nervous",
            Temperament::Confident => "confident",
        }
    }
}

impl std::fmt::Display for Temperament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-step intensity used by assertiveness, empathy and compliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
}

impl Level {
    /// Every level value
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    /// Lowercase trait value
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-shape trait record, immutable once generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Temperament
    pub temperament: Temperament,
    /// Assertiveness
    pub assertiveness: Level,
    /// Empathy
    pub empathy: Level,
    /// Compliance with rules and authority
    pub compliance: Level,
}

impl Persona {
    /// Sample each trait independently and uniformly from its domain
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            temperament: *Temperament::ALL.choose(rng).unwrap_or(&Temperament::Calm),
            assertiveness: *Level::ALL.choose(rng).unwrap_or(&Level::Medium),
            empathy: *Level::ALL.choose(rng).unwrap_or(&Level::Medium),
            compliance: *Level::ALL.choose(rng).unwrap_or(&Level::Medium),
        }
    }

    /// Trait name/value pairs in display order
    pub fn traits(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Temperament", self.temperament.as_str()),
            ("Assertiveness", self.assertiveness.as_str()),
            ("Empathy", self.empathy.as_str()),
            ("Compliance", self.compliance.as_str()),
        ]
    }
}
