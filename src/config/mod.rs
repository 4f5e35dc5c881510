//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables
//! - CLI arguments (applied by the binary on top of the merged result)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Text-generation oracle configuration
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Simulation run configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| SimError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| SimError::Config(format!("Failed to parse config: {e}")))
    }

    /// Per-user config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("prison-sim").join("config.toml"))
    }

    /// Load from `path`, or from the per-user file when it exists, or defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Apply environment variable overrides on top of this config
    pub fn with_env(mut self) -> Self {
        if let Ok(model) = std::env::var("PRISON_SIM_MODEL") {
            self.oracle.model = model;
        }
        if let Ok(url) = std::env::var("PRISON_SIM_API_URL") {
            self.oracle.api_url = url;
        }
        if let Some(key) = std::env::var("PRISON_SIM_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .ok()
            .filter(|k| !k.is_empty())
        {
            self.oracle.api_key = Some(key);
        }

        if let Ok(val) = std::env::var("PRISON_SIM_EVENTS") {
            if let Ok(val) = val.parse() {
                self.simulation.events = val;
            }
        }
        if let Ok(val) = std::env::var("PRISON_SIM_TURNS") {
            if let Ok(val) = val.parse() {
                self.simulation.turns = val;
            }
        }
        if let Ok(val) = std::env::var("PRISON_SIM_SEED") {
            if let Ok(val) = val.parse() {
                self.simulation.seed = Some(val);
            }
        }

        self
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        Self::default().with_env()
    }
}

/// Oracle (chat-completions endpoint) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Chat completions URL of an OpenAI-compatible API
    pub api_url: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Bearer token; only ever read from the environment or CLI
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Sampling temperature (provider default when unset)
    pub temperature: Option<f32>,

    /// Completion length cap (provider default when unset)
    pub max_tokens: Option<u32>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            timeout_secs: 60,
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Simulation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of events to run
    pub events: usize,

    /// Dialogue turns per event
    pub turns: usize,

    /// Number of prisoners in the population
    pub prisoners: usize,

    /// Number of guards in the population
    pub guards: usize,

    /// Text export destination
    pub output: PathBuf,

    /// RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            events: 10,
            turns: 10,
            prisoners: 6,
            guards: 3,
            output: PathBuf::from("simulation_results.txt"),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.oracle.model, "gpt-4o-mini");
        assert_eq!(config.simulation.events, 10);
        assert_eq!(config.simulation.turns, 10);
        assert_eq!(config.simulation.prisoners, 6);
        assert_eq!(config.simulation.guards, 3);
        assert!(config.oracle.api_key.is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            [oracle]
            api_url = "https://openrouter.ai/api/v1/chat/completions"
            model = "meta-llama/llama-3.2-3b-instruct:free"
            temperature = 0.7

            [simulation]
            events = 3
            turns = 4
            seed = 42
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.oracle.model, "meta-llama/llama-3.2-3b-instruct:free");
        assert_eq!(config.oracle.temperature, Some(0.7));
        assert_eq!(config.oracle.timeout_secs, 60);
        assert_eq!(config.simulation.events, 3);
        assert_eq!(config.simulation.turns, 4);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.simulation.guards, 3);
    }

    #[test]
    fn test_api_key_not_serialized() {
        let mut config = Config::default();
        config.oracle.api_key = Some("sk-secret".to_string());
        let out = toml::to_string(&config).unwrap();
        assert!(!out.contains("sk-secret"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[simulation]\nevents = 7\n").unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.simulation.events, 7);
        assert_eq!(config.simulation.turns, 10);
    }
}
