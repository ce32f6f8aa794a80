//! Inbound events

use crate::state::UserId;

/// One inbound event from the messaging client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub user_id: UserId,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Plain text message
    Text(String),
    /// Button press carrying a token minted by an earlier response
    Callback(String),
}

impl Event {
    pub fn text(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            kind: EventKind::Text(text.into()),
        }
    }

    pub fn callback(user_id: UserId, data: impl Into<String>) -> Self {
        Self {
            user_id,
            kind: EventKind::Callback(data.into()),
        }
    }

    /// Message text or callback data
    pub fn payload(&self) -> &str {
        match &self.kind {
            EventKind::Text(text) => text,
            EventKind::Callback(data) => data,
        }
    }

    pub fn is_callback(&self) -> bool {
        matches!(self.kind, EventKind::Callback(_))
    }
}
