//! Solomiya Telegram Bot
//!
//! A Telegram bot about the life and work of the Ukrainian opera singer
//! Solomiya Krushelnytska. Static content sections sit next to two small
//! interactive flows, a quiz and a quest, that keep per-user session state
//! across messages.

pub mod config;
pub mod content;
pub mod handlers;
pub mod routing;
pub mod state;
pub mod transport;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BotError, Result};

// Re-export main components for easy access
pub use content::ContentStore;
pub use routing::{Event, EventRouter, Response, Routed};
pub use state::{Session, SessionState, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
