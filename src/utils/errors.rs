//! Error handling for the Solomiya bot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the bot
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Content validation errors, raised while loading the content store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Collection '{0}' must not be empty")]
    EmptyCollection(&'static str),

    #[error("Quiz question {index}: correct answer '{answer}' must match exactly one option")]
    QuizAnswerMismatch { index: usize, answer: String },

    #[error("Quest stage {index}: correct option {option} is out of range")]
    QuestOptionOutOfRange { index: usize, option: usize },

    #[error("Quest stage {index}: {feedback} feedback entries for {options} options")]
    QuestFeedbackMismatch { index: usize, options: usize, feedback: usize },
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, BotError>;

impl BotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            BotError::Telegram(_) => true,
            BotError::Content(_) => false,
            BotError::Config(_) => false,
            BotError::Serialization(_) => false,
            BotError::Io(_) => true,
            BotError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BotError::Content(_) => ErrorSeverity::Critical,
            BotError::Config(_) => ErrorSeverity::Critical,
            BotError::InvalidInput(_) => ErrorSeverity::Info,
            BotError::Telegram(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
