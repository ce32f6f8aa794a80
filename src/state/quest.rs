//! Quest state machine
//!
//! `Idle -> InQuest(0) -> ... -> InQuest(N-1) -> Idle`. A correct option
//! advances one stage, a wrong one keeps the user on the same stage.

use thiserror::Error;
use crate::content::QuestStage;
use super::session::Session;

/// What happened after an option was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestStep {
    /// Moved on to `stage`
    Advanced { stage: usize },
    /// Last stage solved
    Completed,
    /// Wrong option; still on `stage`
    Retry { stage: usize, feedback: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestError {
    #[error("no quest is in progress")]
    NotInQuest,

    #[error("stage {0} no longer exists")]
    StageOutOfRange(usize),

    #[error("option {option} is out of range for stage {stage}")]
    OptionOutOfRange { stage: usize, option: usize },

    #[error("quest has no stages")]
    NoStages,
}

/// Enter the first stage
pub fn start(stages: &[QuestStage]) -> Result<Session, QuestError> {
    if stages.is_empty() {
        return Err(QuestError::NoStages);
    }
    Ok(Session::InQuest { current_stage: 0 })
}

/// Apply the chosen option to the current stage
pub fn choose(
    session: &Session,
    stages: &[QuestStage],
    option_index: usize,
) -> Result<(QuestStep, Session), QuestError> {
    let Session::InQuest { current_stage } = session else {
        return Err(QuestError::NotInQuest);
    };
    let current_stage = *current_stage;

    let stage = stages
        .get(current_stage)
        .ok_or(QuestError::StageOutOfRange(current_stage))?;
    if option_index >= stage.options.len() {
        return Err(QuestError::OptionOutOfRange {
            stage: current_stage,
            option: option_index,
        });
    }

    if option_index != stage.correct_option {
        let feedback = stage.feedback.get(option_index).cloned().unwrap_or_default();
        return Ok((
            QuestStep::Retry {
                stage: current_stage,
                feedback,
            },
            session.clone(),
        ));
    }

    let next_stage = current_stage + 1;
    if next_stage < stages.len() {
        Ok((
            QuestStep::Advanced { stage: next_stage },
            Session::InQuest {
                current_stage: next_stage,
            },
        ))
    } else {
        Ok((QuestStep::Completed, Session::Idle))
    }
}
