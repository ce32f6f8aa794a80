//! Trigger registry
//!
//! A trigger binds an event matcher, an optional required session state and
//! a handler. Triggers are registered once at startup; registration order
//! decides which one wins when several match.

use tracing::debug;
use crate::content::ContentStore;
use crate::state::{Session, SessionState};
use super::capabilities::{Clock, RandomSource};
use super::event::{Event, EventKind};
use super::response::Response;

/// Predicate over an event's text or callback data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Text message equal to the given string
    ExactText(String),
    /// Bot command such as `/start`, optionally addressed as
    /// `/start@SomeBot` and followed by a whitespace-separated payload
    Command(String),
    /// Callback data equal to the given string
    CallbackExact(String),
    /// Callback data starting with the given string
    CallbackPrefix(String),
}

impl Matcher {
    pub fn accepts(&self, event: &Event) -> bool {
        match (self, &event.kind) {
            (Matcher::ExactText(expected), EventKind::Text(text)) => text == expected,
            (Matcher::Command(command), EventKind::Text(text)) => is_command(text, command),
            (Matcher::CallbackExact(expected), EventKind::Callback(data)) => data == expected,
            (Matcher::CallbackPrefix(prefix), EventKind::Callback(data)) => {
                data.starts_with(prefix.as_str())
            }
            _ => false,
        }
    }
}

fn is_command(text: &str, command: &str) -> bool {
    let Some(rest) = text.strip_prefix(command) else {
        return false;
    };
    match rest.chars().next() {
        None => true,
        Some(c) if c.is_whitespace() => true,
        // `/start@` alone is not a mention
        Some('@') => rest[1..].chars().next().is_some_and(|c| !c.is_whitespace()),
        Some(_) => false,
    }
}

/// Read-only capabilities handed to every handler
#[derive(Clone, Copy)]
pub struct HandlerContext<'a> {
    pub content: &'a ContentStore,
    pub random: &'a dyn RandomSource,
    pub clock: &'a dyn Clock,
}

/// Why an event produced no response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// No registered trigger accepted the event
    NoTrigger,
    /// Callback data did not carry a parsable index
    MalformedCallback,
    /// Callback index outside the content or session it refers to
    IndexOutOfRange,
    /// Session no longer in the state the callback was minted for
    StateMismatch,
    /// Synthetic re-dispatch chain exceeded the configured depth
    RedispatchLimit,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::NoTrigger => "no_trigger",
            DropReason::MalformedCallback => "malformed_callback",
            DropReason::IndexOutOfRange => "index_out_of_range",
            DropReason::StateMismatch => "state_mismatch",
            DropReason::RedispatchLimit => "redispatch_limit",
        }
    }

    /// Stale callbacks are worth a warning; unmatched chatter is not
    pub fn is_stale_callback(&self) -> bool {
        matches!(
            self,
            DropReason::MalformedCallback | DropReason::IndexOutOfRange | DropReason::StateMismatch
        )
    }
}

/// Result of running one handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Send `responses` and store `next` as the user's session
    Reply {
        responses: Vec<Response>,
        next: Session,
    },
    /// Route a synthetic event for the same user through the registry again
    Redispatch(Event),
    /// Silently drop the event
    Drop(DropReason),
}

impl Outcome {
    pub fn reply(response: Response, next: Session) -> Self {
        Outcome::Reply {
            responses: vec![response],
            next,
        }
    }

    pub fn replies(responses: Vec<Response>, next: Session) -> Self {
        Outcome::Reply { responses, next }
    }
}

/// Handler signature: pure function of event, session and content
pub type Handler = fn(&HandlerContext<'_>, &Event, &Session) -> Outcome;

/// Immutable binding of matcher, required state and handler
#[derive(Clone)]
pub struct Trigger {
    pub name: &'static str,
    pub matcher: Matcher,
    pub required_state: Option<SessionState>,
    pub handler: Handler,
}

impl Trigger {
    pub fn new(name: &'static str, matcher: Matcher, handler: Handler) -> Self {
        Self {
            name,
            matcher,
            required_state: None,
            handler,
        }
    }

    /// Only fire while the session is in `state`
    pub fn requires(mut self, state: SessionState) -> Self {
        self.required_state = Some(state);
        self
    }

    pub fn fires_for(&self, event: &Event, session: &Session) -> bool {
        self.matcher.accepts(event)
            && self
                .required_state
                .map_or(true, |required| required == session.state())
    }
}

impl std::fmt::Debug for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trigger")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .field("required_state", &self.required_state)
            .finish_non_exhaustive()
    }
}

/// Ordered trigger set
#[derive(Debug, Clone, Default)]
pub struct TriggerRegistry {
    triggers: Vec<Trigger>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trigger; earlier registrations take precedence
    pub fn register(&mut self, trigger: Trigger) -> &mut Self {
        debug!(trigger = trigger.name, matcher = ?trigger.matcher, "Registering trigger");
        self.triggers.push(trigger);
        self
    }

    /// First trigger, in registration order, that fires for the event
    pub fn find(&self, event: &Event, session: &Session) -> Option<&Trigger> {
        self.triggers.iter().find(|trigger| trigger.fires_for(event, session))
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.triggers.iter().map(|trigger| trigger.name)
    }
}
