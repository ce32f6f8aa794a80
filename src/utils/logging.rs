//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the bot.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{BotError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let stdout_layer = if config.format == "json" {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "solomiya-bot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| BotError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a session state transition
pub fn log_transition(user_id: i64, trigger: &str, from: &str, to: &str) {
    if from == to {
        debug!(user_id = user_id, trigger = trigger, state = from, "Session state unchanged");
    } else {
        info!(
            user_id = user_id,
            trigger = trigger,
            from = from,
            to = to,
            "Session state transition"
        );
    }
}

/// Log an event that no handler accepted
pub fn log_dropped_event(user_id: i64, reason: &str, payload: &str, stale: bool) {
    if stale {
        warn!(user_id = user_id, reason = reason, payload = payload, "Dropping stale callback");
    } else {
        debug!(user_id = user_id, reason = reason, payload = payload, "Event dropped");
    }
}

/// Log transport errors with context
pub fn log_transport_error(user_id: i64, error: &str, context: Option<&str>) {
    error!(
        user_id = user_id,
        error = error,
        context = context,
        "Transport error occurred"
    );
}
