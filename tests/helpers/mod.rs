//! Test helpers module
//!
//! Shared fixtures for the integration tests: a small content set, scripted
//! randomness, a recording transport and a mock Telegram Bot API server.

#![allow(dead_code)]

pub mod content_fixture;
pub mod recording_transport;
pub mod telegram_mock;

pub use content_fixture::*;
pub use recording_transport::*;
pub use telegram_mock::*;

use std::sync::{Arc, Once};
use chrono::NaiveDate;
use solomiya_bot::handlers::build_registry;
use solomiya_bot::routing::{EventRouter, FixedClock, RandomSource};
use solomiya_bot::state::SessionStore;

static INIT: Once = Once::new();

/// Install a test subscriber once per test binary
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("solomiya_bot=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Router over the fixture content with the production trigger table
pub fn test_router(random: Arc<dyn RandomSource>) -> EventRouter {
    init_test_env();
    EventRouter::new(build_registry(), SessionStore::new(), Arc::new(fixture_store()))
        .with_random(random)
        .with_clock(Arc::new(FixedClock(fixture_date())))
}

/// 2024-01-01: digit sum 10, so the opera of the day is index 1 of 3
pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}
