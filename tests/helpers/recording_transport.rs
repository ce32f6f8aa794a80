//! In-memory transport that records every delivered response

use std::sync::Mutex;
use std::time::Duration;
use futures::future::BoxFuture;
use solomiya_bot::routing::Response;
use solomiya_bot::transport::Transport;
use solomiya_bot::{BotError, Result};

#[derive(Debug, Default)]
pub struct RecordingTransport {
    delivered: Mutex<Vec<Response>>,
    delay: Option<Duration>,
    fail: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep before recording each response, to widen race windows
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Transport whose every delivery fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn delivered(&self) -> Vec<Response> {
        self.delivered.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    fn deliver<'a>(&'a self, response: &'a Response) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err(BotError::InvalidInput("transport unavailable".to_string()));
            }
            self.delivered.lock().unwrap().push(response.clone());
            Ok(())
        })
    }
}
