//! Session storage implementation
//!
//! In-memory session store with per-user serialization. Each user owns a
//! slot guarded by an async mutex; the outer map lock is only held long
//! enough to find or create a slot, so different users never wait on each
//! other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::{debug, info, warn};
use super::session::{Session, SessionState, UserId};

type Slot = Arc<AsyncMutex<Session>>;

/// Per-user session store
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    slots: Arc<Mutex<HashMap<UserId, Slot>>>,
}

/// Exclusive handle to one user's session.
///
/// Holding the guard serializes every other read or write for that user
/// until it is dropped. Waiters are woken in FIFO order.
#[derive(Debug)]
pub struct SessionGuard {
    user_id: UserId,
    guard: OwnedMutexGuard<Session>,
}

impl SessionGuard {
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Current session snapshot
    pub fn get(&self) -> Session {
        self.guard.clone()
    }

    /// Replace the whole session
    pub fn set(&mut self, session: Session) {
        *self.guard = session;
    }
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<UserId, Slot>> {
        // The map only ever holds fully constructed slots, so a panic while
        // it was locked cannot have left it inconsistent.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, user_id: UserId) -> Slot {
        self.slots()
            .entry(user_id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(Session::Idle)))
            .clone()
    }

    /// Acquire exclusive access to a user's session, creating an idle one
    /// on first use
    pub async fn lock(&self, user_id: UserId) -> SessionGuard {
        let guard = self.slot(user_id).lock_owned().await;
        SessionGuard { user_id, guard }
    }

    /// Read a user's session; absent users are idle
    pub async fn get(&self, user_id: UserId) -> Session {
        self.lock(user_id).await.get()
    }

    /// Replace a user's session atomically
    pub async fn set(&self, user_id: UserId, session: Session) {
        let mut guard = self.lock(user_id).await;
        debug!(user_id = user_id, state = %session.state(), "Storing session");
        guard.set(session);
    }

    /// Number of allocated slots, idle ones included
    pub fn len(&self) -> usize {
        self.slots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }

    /// Drop slots that are idle and not referenced by any in-flight event.
    ///
    /// An idle session is indistinguishable from an absent one, so this
    /// never changes observable behavior.
    pub fn purge_idle(&self) -> usize {
        let mut slots = self.slots();
        let before = slots.len();
        slots.retain(|_, slot| {
            if Arc::strong_count(slot) > 1 {
                return true;
            }
            match slot.try_lock() {
                Ok(session) => !session.is_idle(),
                Err(_) => true,
            }
        });
        let purged = before - slots.len();
        if purged > 0 {
            debug!(purged = purged, remaining = slots.len(), "Purged idle sessions");
        }
        purged
    }

    /// Count sessions per state. Slots locked by in-flight events are
    /// reported as busy.
    pub fn stats(&self) -> StorageStats {
        let slots = self.slots();
        let mut stats = StorageStats {
            total_sessions: slots.len(),
            ..StorageStats::default()
        };
        for slot in slots.values() {
            match slot.try_lock() {
                Ok(session) => match session.state() {
                    SessionState::Idle => stats.idle += 1,
                    SessionState::AwaitingQuizAnswer => stats.awaiting_quiz_answer += 1,
                    SessionState::InQuest => stats.in_quest += 1,
                },
                Err(_) => stats.busy += 1,
            }
        }
        stats
    }
}

/// Storage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct StorageStats {
    pub total_sessions: usize,
    pub idle: usize,
    pub awaiting_quiz_answer: usize,
    pub in_quest: usize,
    pub busy: usize,
}

/// Session store with a periodic idle-slot cleanup task
#[derive(Debug)]
pub struct SessionStoreManager {
    store: SessionStore,
    cleanup_interval: Duration,
    cleanup_handle: Option<tokio::task::JoinHandle<()>>,
}

impl SessionStoreManager {
    pub fn new(store: SessionStore, cleanup_interval: Duration) -> Self {
        Self {
            store,
            cleanup_interval,
            cleanup_handle: None,
        }
    }

    /// Start automatic cleanup task
    pub fn start_cleanup(&mut self) {
        if self.cleanup_handle.is_some() {
            warn!("Cleanup task is already running");
            return;
        }

        let store = self.store.clone();
        let interval = self.cleanup_interval;

        let handle = tokio::spawn(async move {
            let mut cleanup_interval = tokio::time::interval(interval);

            loop {
                cleanup_interval.tick().await;
                let purged = store.purge_idle();
                if purged > 0 {
                    info!("Cleanup task removed {} idle sessions", purged);
                }
            }
        });

        self.cleanup_handle = Some(handle);
        info!("Started session cleanup task with interval {:?}", self.cleanup_interval);
    }

    /// Stop automatic cleanup task
    pub fn stop_cleanup(&mut self) {
        if let Some(handle) = self.cleanup_handle.take() {
            handle.abort();
            info!("Stopped session cleanup task");
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}

impl Drop for SessionStoreManager {
    fn drop(&mut self) {
        self.stop_cleanup();
    }
}
