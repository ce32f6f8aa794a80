//! Transport layer
//!
//! The router hands finished responses to a [`Transport`]; the Telegram
//! adapter lives in [`telegram`].

pub mod telegram;

use futures::future::BoxFuture;
use crate::routing::Response;
use crate::utils::errors::Result;

/// Sink for outbound responses of a single inbound event
pub trait Transport: Send + Sync {
    /// Deliver one response. Errors other than recoverable, locally handled
    /// conditions propagate to the router's caller.
    fn deliver<'a>(&'a self, response: &'a Response) -> BoxFuture<'a, Result<()>>;
}

pub use telegram::TelegramTransport;
