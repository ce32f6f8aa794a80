//! Quest handlers

use tracing::warn;
use crate::content::QuestStage;
use crate::routing::{Choice, DropReason, Event, HandlerContext, Outcome, Response};
use crate::state::quest::{self, QuestError, QuestStep};
use crate::state::Session;
use crate::utils::helpers::{callback_token, parse_callback_index};
use super::labels;

pub fn start(ctx: &HandlerContext<'_>, event: &Event, session: &Session) -> Outcome {
    let stages = ctx.content.list_quest_stages();
    match quest::start(stages) {
        Ok(next) => Outcome::reply(stage_prompt(None, 0, &stages[0]), next),
        Err(e) => {
            warn!(user_id = event.user_id, error = %e, "Cannot start quest");
            Outcome::reply(Response::text(labels::GENERIC_FAILURE), session.clone())
        }
    }
}

pub fn choose(ctx: &HandlerContext<'_>, event: &Event, session: &Session) -> Outcome {
    let Some(option_index) = parse_callback_index(event.payload(), labels::QUEST_OPTION_PREFIX) else {
        return Outcome::Drop(DropReason::MalformedCallback);
    };

    let stages = ctx.content.list_quest_stages();
    let (step, next) = match quest::choose(session, stages, option_index) {
        Ok(chosen) => chosen,
        Err(QuestError::NotInQuest) => return Outcome::Drop(DropReason::StateMismatch),
        Err(_) => return Outcome::Drop(DropReason::IndexOutOfRange),
    };

    let response = match step {
        QuestStep::Advanced { stage } => stage_prompt(Some(labels::QUEST_CORRECT), stage, &stages[stage]),
        QuestStep::Completed => Response::text(labels::QUEST_COMPLETED),
        QuestStep::Retry { feedback, .. } => Response::text(format!(
            "{} {}\n\n{}",
            labels::QUEST_WRONG,
            feedback,
            labels::QUEST_RETRY
        )),
    };

    Outcome::reply(response, next)
}

/// Stage description with its options; stage numbers are shown 1-based
fn stage_prompt(prefix: Option<&str>, index: usize, stage: &QuestStage) -> Response {
    let heading = format!("{} - Етап {}\n\n{}", labels::QUEST_TITLE, index + 1, stage.description);
    let body = match prefix {
        Some(prefix) => format!("{}\n\n{}", prefix, heading),
        None => heading,
    };
    let choices = stage
        .options
        .iter()
        .enumerate()
        .map(|(option, label)| Choice::new(label.clone(), callback_token(labels::QUEST_OPTION_PREFIX, option)))
        .collect();
    Response::with_choices(body, choices)
}
