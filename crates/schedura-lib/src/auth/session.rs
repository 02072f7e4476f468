// ============================
// schedura-lib/src/auth/session.rs
// ============================
//! Startup session gate.
//!
//! The gate waits for the splash delay and, concurrently, reads the persisted
//! session marker. Once both are done it resolves to a [`SessionState`] and
//! stays resolved for the rest of the process.
use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use metrics::counter;
use tokio::sync::{oneshot, OnceCell};
use tracing::{debug, info, warn};

use schedura_common::{SessionState, USER_TOKEN_KEY};

use crate::metrics::{SESSION_READ_FAILED, SESSION_RESOLVED};
use crate::storage::KeyValueStore;

/// Default splash delay
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(2000);

/// Source of the gate's fixed delay
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Where the gate is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// Splash is showing; not interactive
    Initializing,
    /// Terminal for the process lifetime
    Resolved(SessionState),
}

/// Decides, once, which navigation root to mount
pub struct SessionGate<S, C = TokioClock> {
    store: S,
    clock: C,
    delay: Duration,
    resolved: OnceCell<SessionState>,
}

impl<S: KeyValueStore> SessionGate<S, TokioClock> {
    /// Create a gate on the tokio timer
    pub fn new(store: S, delay: Duration) -> Self {
        Self::with_clock(store, TokioClock, delay)
    }
}

impl<S: KeyValueStore, C: Clock> SessionGate<S, C> {
    /// Create a gate with an injected clock
    pub fn with_clock(store: S, clock: C, delay: Duration) -> Self {
        Self {
            store,
            clock,
            delay,
            resolved: OnceCell::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn phase(&self) -> GatePhase {
        match self.resolved.get() {
            Some(state) => GatePhase::Resolved(*state),
            None => GatePhase::Initializing,
        }
    }

    /// Resolve the session state.
    ///
    /// Suspends until both the delay and the marker read have finished. The
    /// first result is cached; later calls return it without reading the store
    /// again, even if the marker has changed since. Never fails: a read error
    /// counts as an absent marker.
    pub async fn resolve_session(&self) -> SessionState {
        *self.resolved.get_or_init(|| self.evaluate()).await
    }

    async fn evaluate(&self) -> SessionState {
        let ((), marker) = tokio::join!(self.clock.sleep(self.delay), self.read_marker());

        let state = SessionState::from_marker(marker.as_deref());
        counter!(SESSION_RESOLVED, "state" => state_label(state)).increment(1);
        info!(?state, delay_ms = self.delay.as_millis() as u64, "session gate resolved");
        state
    }

    async fn read_marker(&self) -> Option<String> {
        match self.store.get(USER_TOKEN_KEY).await {
            Ok(marker) => marker,
            Err(err) => {
                // fail closed
                counter!(SESSION_READ_FAILED).increment(1);
                warn!(error = %err, "session marker read failed, treating as absent");
                None
            },
        }
    }
}

impl<S, C> SessionGate<S, C>
where
    S: KeyValueStore + 'static,
    C: Clock + 'static,
{
    /// Start resolution on a background task.
    ///
    /// Resolution always runs to completion. Dropping the returned handle
    /// before then discards the result instead of delivering it.
    pub fn spawn(self: Arc<Self>) -> GateHandle {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let state = self.resolve_session().await;
            if tx.send(state).is_err() {
                debug!(?state, "session gate consumer gone, result discarded");
            }
        });
        GateHandle { rx }
    }
}

/// Receiving end of a spawned gate resolution
#[derive(Debug)]
pub struct GateHandle {
    rx: oneshot::Receiver<SessionState>,
}

impl GateHandle {
    /// Wait for the resolved state
    pub async fn resolved(self) -> SessionState {
        // the resolving task only goes away without sending if it panicked
        self.rx.await.unwrap_or(SessionState::Unauthenticated)
    }

    /// Non-blocking poll; `None` while still initializing
    pub fn try_resolved(&mut self) -> Option<SessionState> {
        self.rx.try_recv().ok()
    }
}

fn state_label(state: SessionState) -> &'static str {
    match state {
        SessionState::Authenticated => "authenticated",
        SessionState::Unauthenticated => "unauthenticated",
    }
}
