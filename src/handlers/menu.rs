//! Menu handlers: /start, /help, the museum submenu and navigation back

use crate::routing::{Event, HandlerContext, Outcome, Response};
use crate::state::Session;
use super::labels;

/// Show the main menu. Any running quiz or quest is abandoned.
pub fn start(_ctx: &HandlerContext<'_>, _event: &Event, _session: &Session) -> Outcome {
    Outcome::reply(Response::with_menu(labels::WELCOME, labels::main_menu()), Session::Idle)
}

pub fn help(_ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    Outcome::reply(Response::text(labels::HELP), session.clone())
}

pub fn museum(_ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    Outcome::reply(
        Response::with_menu(labels::MUSEUM_WELCOME, labels::museum_menu()),
        session.clone(),
    )
}

/// Back to the main menu goes through the `/start` trigger
pub fn back_to_main(_ctx: &HandlerContext<'_>, event: &Event, _session: &Session) -> Outcome {
    Outcome::Redispatch(Event::text(event.user_id, labels::CMD_START))
}

/// Quiz or quest entry pressed while another flow is running
pub fn flow_busy(_ctx: &HandlerContext<'_>, _event: &Event, session: &Session) -> Outcome {
    Outcome::reply(Response::text(labels::FLOW_BUSY), session.clone())
}
