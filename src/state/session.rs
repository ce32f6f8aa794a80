//! Per-user session
//!
//! A session is exactly one of three states. The payload lives inside the
//! variant, so leaving a flow can never leave stale fields behind.

use serde::{Deserialize, Serialize};

/// Opaque stable user identity
pub type UserId = i64;

/// Per-user conversation state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Idle,
    AwaitingQuizAnswer {
        question_index: usize,
        correct_answer: String,
    },
    InQuest {
        current_stage: usize,
    },
}

/// Payload-free tag of a [`Session`], used by triggers to declare the state
/// they require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    AwaitingQuizAnswer,
    InQuest,
}

impl Session {
    pub fn state(&self) -> SessionState {
        match self {
            Session::Idle => SessionState::Idle,
            Session::AwaitingQuizAnswer { .. } => SessionState::AwaitingQuizAnswer,
            Session::InQuest { .. } => SessionState::InQuest,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Session::Idle)
    }
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::AwaitingQuizAnswer => "awaiting_quiz_answer",
            SessionState::InQuest => "in_quest",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_idle() {
        let session = Session::default();
        assert!(session.is_idle());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_state_tags() {
        let quiz = Session::AwaitingQuizAnswer { question_index: 1, correct_answer: "B".into() };
        let quest = Session::InQuest { current_stage: 2 };
        assert_eq!(quiz.state(), SessionState::AwaitingQuizAnswer);
        assert_eq!(quest.state(), SessionState::InQuest);
        assert_eq!(quest.state().to_string(), "in_quest");
    }

    #[test]
    fn test_serialized_idle_carries_no_payload() {
        let value = serde_json::to_value(Session::Idle).unwrap();
        assert_eq!(value, serde_json::json!({ "state": "idle" }));

        let value = serde_json::to_value(Session::InQuest { current_stage: 1 }).unwrap();
        assert_eq!(value, serde_json::json!({ "state": "in_quest", "current_stage": 1 }));
    }
}
