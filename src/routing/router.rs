//! Event router
//!
//! Classifies each inbound event against the trigger registry, runs the
//! winning handler with the user's session and persists the next session
//! before the responses go out.

use std::sync::Arc;
use tracing::{debug, instrument};
use crate::content::ContentStore;
use crate::state::{Session, SessionStore};
use crate::transport::Transport;
use crate::utils::errors::Result;
use crate::utils::helpers::truncate_text;
use crate::utils::logging;
use super::capabilities::{Clock, RandomSource, SystemClock, ThreadRandom};
use super::event::Event;
use super::response::Response;
use super::trigger::{DropReason, HandlerContext, Outcome, TriggerRegistry};

const DEFAULT_MAX_REDISPATCH_DEPTH: usize = 2;

/// Routing decision for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    Handled {
        trigger: &'static str,
        responses: Vec<Response>,
        next: Session,
    },
    Dropped(DropReason),
}

impl Routed {
    pub fn trigger(&self) -> Option<&'static str> {
        match self {
            Routed::Handled { trigger, .. } => Some(*trigger),
            Routed::Dropped(_) => None,
        }
    }

    pub fn responses(&self) -> &[Response] {
        match self {
            Routed::Handled { responses, .. } => responses,
            Routed::Dropped(_) => &[],
        }
    }
}

/// Routes events to handlers and owns the session read-modify-write cycle
pub struct EventRouter {
    registry: TriggerRegistry,
    sessions: SessionStore,
    content: Arc<ContentStore>,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
    max_redispatch_depth: usize,
}

impl EventRouter {
    /// Router with OS randomness and the system clock
    pub fn new(registry: TriggerRegistry, sessions: SessionStore, content: Arc<ContentStore>) -> Self {
        Self {
            registry,
            sessions,
            content,
            random: Arc::new(ThreadRandom),
            clock: Arc::new(SystemClock),
            max_redispatch_depth: DEFAULT_MAX_REDISPATCH_DEPTH,
        }
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_max_redispatch_depth(mut self, depth: usize) -> Self {
        self.max_redispatch_depth = depth;
        self
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }

    /// Pure routing step: pick a trigger and run its handler.
    ///
    /// Synthetic events produced by handlers are routed against the same
    /// session, up to the configured depth.
    pub fn route(&self, event: &Event, session: &Session) -> Routed {
        let ctx = HandlerContext {
            content: &self.content,
            random: self.random.as_ref(),
            clock: self.clock.as_ref(),
        };

        let mut current = event.clone();
        for depth in 0..=self.max_redispatch_depth {
            let Some(trigger) = self.registry.find(&current, session) else {
                return Routed::Dropped(DropReason::NoTrigger);
            };

            debug!(
                user_id = event.user_id,
                trigger = trigger.name,
                state = %session.state(),
                depth = depth,
                "Trigger matched"
            );

            match (trigger.handler)(&ctx, &current, session) {
                Outcome::Reply { responses, next } => {
                    return Routed::Handled {
                        trigger: trigger.name,
                        responses,
                        next,
                    };
                }
                Outcome::Redispatch(synthetic) => {
                    current = Event {
                        user_id: event.user_id,
                        kind: synthetic.kind,
                    };
                }
                Outcome::Drop(reason) => return Routed::Dropped(reason),
            }
        }

        Routed::Dropped(DropReason::RedispatchLimit)
    }

    /// Process one event end to end.
    ///
    /// The user's session stays locked until every response has been handed
    /// to the transport, so events from one user are applied strictly in
    /// arrival order. Transport failures propagate; the session write has
    /// already happened by then.
    #[instrument(skip_all, fields(user_id = event.user_id))]
    pub async fn dispatch(&self, event: Event, transport: &dyn Transport) -> Result<Routed> {
        let mut guard = self.sessions.lock(event.user_id).await;
        let session = guard.get();
        let routed = self.route(&event, &session);

        match &routed {
            Routed::Handled { trigger, responses, next } => {
                logging::log_transition(
                    event.user_id,
                    trigger,
                    session.state().as_str(),
                    next.state().as_str(),
                );
                guard.set(next.clone());

                for response in responses {
                    if let Err(e) = transport.deliver(response).await {
                        logging::log_transport_error(event.user_id, &e.to_string(), Some(*trigger));
                        return Err(e);
                    }
                }
            }
            Routed::Dropped(reason) => {
                logging::log_dropped_event(
                    event.user_id,
                    reason.as_str(),
                    &truncate_text(event.payload(), 64),
                    reason.is_stale_callback(),
                );
            }
        }

        Ok(routed)
    }
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field("triggers", &self.registry.len())
            .field("sessions", &self.sessions.len())
            .field("max_redispatch_depth", &self.max_redispatch_depth)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use futures::future::{self, BoxFuture};
    use crate::content::store::fixtures::sample_store;
    use crate::routing::trigger::{Matcher, Trigger};
    use crate::state::SessionState;
    use crate::utils::errors::BotError;

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<Response>>,
        fail: bool,
    }

    impl Transport for Recorder {
        fn deliver<'a>(&'a self, response: &'a Response) -> BoxFuture<'a, Result<()>> {
            if self.fail {
                return Box::pin(future::ready(Err(BotError::InvalidInput("offline".into()))));
            }
            self.sent.lock().unwrap().push(response.clone());
            Box::pin(future::ready(Ok(())))
        }
    }

    fn enter(_: &HandlerContext<'_>, _: &Event, _: &Session) -> Outcome {
        Outcome::reply(Response::text("entered"), Session::InQuest { current_stage: 0 })
    }

    fn leave(_: &HandlerContext<'_>, _: &Event, _: &Session) -> Outcome {
        Outcome::reply(Response::text("left"), Session::Idle)
    }

    fn bounce(_: &HandlerContext<'_>, event: &Event, _: &Session) -> Outcome {
        Outcome::Redispatch(Event::text(event.user_id, "enter"))
    }

    fn loop_forever(_: &HandlerContext<'_>, event: &Event, _: &Session) -> Outcome {
        Outcome::Redispatch(Event::callback(event.user_id, "loop"))
    }

    fn router() -> EventRouter {
        let mut registry = TriggerRegistry::new();
        registry
            .register(Trigger::new("enter", Matcher::ExactText("enter".into()), enter).requires(SessionState::Idle))
            .register(Trigger::new("leave", Matcher::ExactText("leave".into()), leave).requires(SessionState::InQuest))
            .register(Trigger::new("bounce", Matcher::CallbackExact("bounce".into()), bounce))
            .register(Trigger::new("loop", Matcher::CallbackExact("loop".into()), loop_forever));
        EventRouter::new(registry, SessionStore::new(), Arc::new(sample_store()))
    }

    #[test]
    fn test_route_is_deterministic() {
        let router = router();
        let event = Event::text(1, "enter");
        for _ in 0..5 {
            assert_eq!(router.route(&event, &Session::Idle).trigger(), Some("enter"));
        }
    }

    #[test]
    fn test_unmatched_event_is_dropped() {
        let router = router();
        assert_eq!(
            router.route(&Event::text(1, "leave"), &Session::Idle),
            Routed::Dropped(DropReason::NoTrigger)
        );
    }

    #[test]
    fn test_redispatch_goes_through_registry() {
        let router = router();
        let routed = router.route(&Event::callback(1, "bounce"), &Session::Idle);
        assert_eq!(routed.trigger(), Some("enter"));

        // the synthetic event is subject to the same state requirements
        let busy = Session::InQuest { current_stage: 0 };
        assert_eq!(
            router.route(&Event::callback(1, "bounce"), &busy),
            Routed::Dropped(DropReason::NoTrigger)
        );
    }

    #[test]
    fn test_redispatch_depth_is_bounded() {
        let router = router().with_max_redispatch_depth(3);
        assert_eq!(
            router.route(&Event::callback(1, "loop"), &Session::Idle),
            Routed::Dropped(DropReason::RedispatchLimit)
        );
    }

    #[tokio::test]
    async fn test_dispatch_persists_next_session_and_sends() {
        let router = router();
        let transport = Recorder::default();

        router.dispatch(Event::text(5, "enter"), &transport).await.unwrap();
        assert_eq!(router.sessions().get(5).await, Session::InQuest { current_stage: 0 });

        router.dispatch(Event::text(5, "leave"), &transport).await.unwrap();
        assert_eq!(router.sessions().get(5).await, Session::Idle);

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.iter().map(Response::body).collect::<Vec<_>>(), vec!["entered", "left"]);
    }

    #[tokio::test]
    async fn test_dropped_event_leaves_session_untouched() {
        let router = router();
        let transport = Recorder::default();
        router.sessions().set(9, Session::InQuest { current_stage: 2 }).await;

        let routed = router.dispatch(Event::text(9, "enter"), &transport).await.unwrap();
        assert_eq!(routed, Routed::Dropped(DropReason::NoTrigger));
        assert_eq!(router.sessions().get(9).await, Session::InQuest { current_stage: 2 });
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_after_session_write() {
        let router = router();
        let transport = Recorder { fail: true, ..Recorder::default() };

        let result = router.dispatch(Event::text(3, "enter"), &transport).await;
        assert!(matches!(result, Err(BotError::InvalidInput(_))));
        assert_eq!(router.sessions().get(3).await, Session::InQuest { current_stage: 0 });
    }
}
