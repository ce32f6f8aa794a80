//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// Content store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Path to the JSON content file
    pub path: String,
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// How often idle session slots are purged
    pub cleanup_interval_seconds: u64,
    /// Upper bound on synthetic re-dispatches triggered by a single event
    pub max_redispatch_depth: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Directory for daily rolling log files; stdout only when absent
    pub directory: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: "content/solomiya.json".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cleanup_interval_seconds: 600,
            max_redispatch_depth: 2,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SOLOMIYA").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::BotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            content: ContentConfig::default(),
            sessions: SessionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
