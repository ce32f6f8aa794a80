//! State management module
//!
//! This module holds per-user sessions, their storage, and the quiz and
//! quest state machines that advance them.

pub mod quest;
pub mod quiz;
pub mod session;
pub mod storage;

// Re-export commonly used state components
pub use quest::{QuestError, QuestStep};
pub use quiz::{QuizError, QuizVerdict};
pub use session::{Session, SessionState, UserId};
pub use storage::{SessionGuard, SessionStore, SessionStoreManager, StorageStats};
