//! Event routing module
//!
//! Inbound events, outbound responses, the trigger registry and the router
//! that ties them to per-user sessions.

pub mod capabilities;
pub mod event;
pub mod response;
pub mod router;
pub mod trigger;

pub use capabilities::{Clock, FixedClock, RandomSource, SeededRandom, SystemClock, ThreadRandom};
pub use event::{Event, EventKind};
pub use response::{Choice, Delivery, Markup, MediaKind, MediaResponse, MediaSource, Response, TextResponse};
pub use router::{EventRouter, Routed};
pub use trigger::{DropReason, Handler, HandlerContext, Matcher, Outcome, Trigger, TriggerRegistry};
