//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use regex::Regex;
use crate::utils::errors::{BotError, Result};
use super::Settings;

const TOKEN_PATTERN: &str = r"^\d+:[A-Za-z0-9_-]+$";

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_content_config(&settings.content)?;
    validate_session_config(&settings.sessions)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(BotError::Config(
            "Bot token is required".to_string()
        ));
    }

    let pattern = Regex::new(TOKEN_PATTERN)
        .map_err(|e| BotError::Config(format!("Invalid token pattern: {}", e)))?;
    if !pattern.is_match(&config.token) {
        return Err(BotError::Config(
            "Bot token must look like '<bot id>:<secret>'".to_string()
        ));
    }

    Ok(())
}

/// Validate content configuration
fn validate_content_config(config: &super::ContentConfig) -> Result<()> {
    if config.path.trim().is_empty() {
        return Err(BotError::Config(
            "Content file path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate session configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.cleanup_interval_seconds == 0 {
        return Err(BotError::Config(
            "Session cleanup interval must be greater than 0".to_string()
        ));
    }

    if config.max_redispatch_depth == 0 {
        return Err(BotError::Config(
            "Redispatch depth must be at least 1".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BotError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.format.as_str()) {
        return Err(BotError::Config(
            format!("Invalid log format: {}. Valid formats: {:?}", config.format, valid_formats)
        ));
    }

    Ok(())
}
