//! Simulation error types.
//!
//! # Error Classification
//!
//! - **Configuration**: an unknown role name, an unreadable config file, or a
//!   setting too small to host a dialogue. Fatal, surfaced immediately.
//! - **Oracle failure**: the text-generation call failed at the transport
//!   level, returned a non-success status, or carried no usable content.
//!   Never retried; it aborts the whole run.
//!
//! A judge reply that lacks one or more score categories is not an error. The
//! missing categories are simply absent from the score record.

use thiserror::Error;

/// Simulation errors.
#[derive(Error, Debug)]
pub enum SimError {
    /// Role name outside {prisoner, guard}.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// A setting needs two distinct members to stage a dialogue.
    #[error("Setting '{setting}' has {available} agent(s), need at least 2")]
    NotEnoughAgents {
        /// Setting name.
        setting: String,
        /// Number of members available.
        available: usize,
    },

    /// A setting refers to an agent missing from the roster.
    #[error("Agent #{0} is not in the roster")]
    UnknownAgent(usize),

    /// No API key configured for the oracle.
    #[error("API key not set (PRISON_SIM_API_KEY or OPENAI_API_KEY)")]
    ApiKeyMissing,

    /// Network communication error while reaching the oracle.
    #[error("Network error: {0}")]
    Network(String),

    /// The oracle answered but the answer is unusable.
    #[error("Oracle error: {0}")]
    Oracle(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Whether this error came from the text-generation oracle.
    pub fn is_oracle_failure(&self) -> bool {
        matches!(
            self,
            SimError::Network(_) | SimError::Oracle(_) | SimError::ApiKeyMissing
        )
    }
}

/// Result type alias for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;

impl From<reqwest::Error> for SimError {
    fn from(err: reqwest::Error) -> Self {
        SimError::Network(err.to_string())
    }
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_failure_classification() {
        assert!(SimError::Network("timeout".into()).is_oracle_failure());
        assert!(SimError::Oracle("no choices".into()).is_oracle_failure());
        assert!(!SimError::UnknownRole("warden".into()).is_oracle_failure());
    }

    #[test]
    fn test_toml_error_maps_to_config() {
        let err: SimError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn test_not_enough_agents_message() {
        let err = SimError::NotEnoughAgents {
            setting: "Solitary".into(),
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Setting 'Solitary' has 1 agent(s), need at least 2"
        );
    }
}
