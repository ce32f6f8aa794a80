//! Quiz handlers

use tracing::warn;
use crate::routing::{Choice, DropReason, Event, HandlerContext, Outcome, Response};
use crate::state::quiz::{self, QuizError, QuizVerdict};
use crate::state::Session;
use crate::utils::helpers::{callback_token, parse_callback_index};
use super::labels;

/// Start a round: random question, options as indexed choices
pub fn start(ctx: &HandlerContext<'_>, event: &Event, session: &Session) -> Outcome {
    let questions = ctx.content.list_quiz_questions();
    let (question_index, next) = match quiz::start(questions, ctx.random) {
        Ok(started) => started,
        Err(QuizError::QuestionOutOfRange(index)) => {
            warn!(user_id = event.user_id, index = index, "Random source picked a missing question");
            return Outcome::Drop(DropReason::IndexOutOfRange);
        }
        Err(e) => {
            warn!(user_id = event.user_id, error = %e, "Cannot start quiz");
            return Outcome::reply(Response::text(labels::GENERIC_FAILURE), session.clone());
        }
    };
    let Some(question) = questions.get(question_index) else {
        return Outcome::Drop(DropReason::IndexOutOfRange);
    };
    let choices = question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| Choice::new(option.clone(), callback_token(labels::QUIZ_ANSWER_PREFIX, index)))
        .collect();

    Outcome::reply(
        Response::with_choices(format!("Питання: {}", question.question), choices),
        next,
    )
}

/// Evaluate the chosen option, end the round and offer another one
pub fn answer(ctx: &HandlerContext<'_>, event: &Event, session: &Session) -> Outcome {
    let Some(option_index) = parse_callback_index(event.payload(), labels::QUIZ_ANSWER_PREFIX) else {
        return Outcome::Drop(DropReason::MalformedCallback);
    };

    let (verdict, next) = match quiz::answer(session, ctx.content.list_quiz_questions(), option_index) {
        Ok(answered) => answered,
        Err(QuizError::NotAwaitingAnswer) => return Outcome::Drop(DropReason::StateMismatch),
        Err(_) => return Outcome::Drop(DropReason::IndexOutOfRange),
    };

    let verdict_text = match verdict {
        QuizVerdict::Correct => labels::QUIZ_CORRECT.to_string(),
        QuizVerdict::Incorrect { correct_answer } => {
            format!("{} {}", labels::QUIZ_INCORRECT, correct_answer)
        }
    };

    Outcome::replies(
        vec![
            Response::text(verdict_text),
            Response::with_choices(
                labels::QUIZ_CONTINUE,
                vec![Choice::new(labels::MORE_QUIZ_BUTTON, labels::MORE_QUIZ)],
            ),
        ],
        next,
    )
}

/// "Another question" re-enters the quiz through its entry trigger
pub fn more(_ctx: &HandlerContext<'_>, event: &Event, _session: &Session) -> Outcome {
    Outcome::Redispatch(Event::text(event.user_id, labels::QUIZ))
}
