//! # Session Controller
//!
//! Owns one swap or redeem session: applies transitions to the shared
//! state, writes the result through to the injected storage slot, and
//! notifies subscribers. The background staleness check has an explicit
//! [`start`](SessionController::start)/[`stop`](SessionController::stop)
//! lifecycle and holds only a weak reference to the controller, so a
//! dropped session never leaves a timer writing to stale state.
//!
//! All mutations go through the controller's lock, so every transition
//! reads the latest session value. Locks are held briefly and never across
//! an `.await`.

use async_channel::{Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use shared::dto::session::SessionSnapshot;
use shared::dto::token::Token;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::core::config::EngineConfig;
use crate::session::events::SessionEvent;
use crate::session::state::{SessionKind, SwapSession};
use crate::storage::SessionStore;

/// Controller for one swap/redeem session
pub struct SessionController {
    kind: SessionKind,
    state: Arc<RwLock<SwapSession>>,
    store: Arc<dyn SessionStore>,
    subscribers: Mutex<Vec<Sender<SessionEvent>>>,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
    staleness_ms: u64,
    refresh_tick_ms: u64,
}

impl SessionController {
    /// Create a controller over `store`, resuming the persisted session
    /// when the slot holds one.
    pub fn new(kind: SessionKind, store: Arc<dyn SessionStore>, config: &EngineConfig) -> Self {
        let session = match store.load() {
            Some(snapshot) => {
                tracing::info!(kind = %kind.title(), "Restored persisted session");
                SwapSession::from(snapshot)
            }
            None => SwapSession::default(),
        };

        Self {
            kind,
            state: Arc::new(RwLock::new(session)),
            store,
            subscribers: Mutex::new(Vec::new()),
            refresh_task: Mutex::new(None),
            staleness_ms: config.staleness_ms,
            refresh_tick_ms: config.refresh_tick_ms,
        }
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Read a copy of the current session state
    pub fn snapshot(&self) -> SwapSession {
        self.state.read().clone()
    }

    /// Register an observer. Each accepted transition delivers exactly one
    /// [`SessionEvent`] to every live subscriber; dropped receivers are
    /// pruned on the next notification.
    pub fn subscribe(&self) -> Receiver<SessionEvent> {
        let (tx, rx) = async_channel::unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Select the source token
    pub fn select_from_token(&self, token: Token) {
        let symbol = token.symbol.clone();
        let snapshot = {
            let mut session = self.state.write();
            session.select_from_token(token);
            SessionSnapshot::from(&*session)
        };
        self.persist(&snapshot);
        self.notify(SessionEvent::FromTokenSelected { symbol });
    }

    /// Select the destination token
    pub fn select_to_token(&self, token: Token) {
        let symbol = token.symbol.clone();
        let snapshot = {
            let mut session = self.state.write();
            session.select_to_token(token);
            SessionSnapshot::from(&*session)
        };
        self.persist(&snapshot);
        self.notify(SessionEvent::ToTokenSelected { symbol });
    }

    /// Type amount text. Returns `false` (and changes nothing) for input
    /// that is not decimal-or-empty.
    pub fn set_from_amount(&self, text: &str) -> bool {
        let result = {
            let mut session = self.state.write();
            if !session.set_from_amount(text, self.staleness_ms) {
                return false;
            }
            (
                SessionSnapshot::from(&*session),
                session.from_amount.clone(),
                session.to_amount.clone(),
            )
        };
        let (snapshot, from_amount, to_amount) = result;
        self.persist(&snapshot);
        self.notify(SessionEvent::AmountChanged {
            from_amount,
            to_amount,
        });
        true
    }

    /// Set the amount to the source token's full on-hand holding
    pub fn set_max(&self) -> bool {
        self.apply_shortcut(|session, staleness_ms| session.set_max(staleness_ms))
    }

    /// Set the amount to half the source token's on-hand holding
    pub fn set_half(&self) -> bool {
        self.apply_shortcut(|session, staleness_ms| session.set_half(staleness_ms))
    }

    fn apply_shortcut(&self, transition: impl FnOnce(&mut SwapSession, u64) -> bool) -> bool {
        let result = {
            let mut session = self.state.write();
            if !transition(&mut session, self.staleness_ms) {
                return false;
            }
            (
                SessionSnapshot::from(&*session),
                session.from_amount.clone(),
                session.to_amount.clone(),
            )
        };
        let (snapshot, from_amount, to_amount) = result;
        self.persist(&snapshot);
        self.notify(SessionEvent::AmountChanged {
            from_amount,
            to_amount,
        });
        true
    }

    /// Reverse the trade direction. No-op while either side is missing.
    pub fn switch_tokens(&self) -> bool {
        let snapshot = {
            let mut session = self.state.write();
            if !session.switch_tokens() {
                return false;
            }
            SessionSnapshot::from(&*session)
        };
        self.persist(&snapshot);
        self.notify(SessionEvent::TokensSwitched);
        true
    }

    /// Manually recompute the rate. No-op while either side is missing.
    pub fn refresh_rate(&self) -> bool {
        let result = {
            let mut session = self.state.write();
            if !session.refresh_rate() {
                return false;
            }
            (SessionSnapshot::from(&*session), session.rate)
        };
        let (snapshot, rate) = result;
        self.persist(&snapshot);
        if let Some(rate) = rate {
            self.notify(SessionEvent::RateRefreshed { rate });
        }
        true
    }

    /// Start the background staleness check.
    ///
    /// Idempotent: calling again while running is a no-op. The task ticks
    /// every `refresh_tick_ms`, re-reads the current state, and refreshes
    /// only when the pair is complete, an amount is typed, and the rate
    /// has aged past the staleness window. Dropping the controller ends
    /// the task.
    pub fn start(self: &Arc<Self>) {
        let mut guard = self.refresh_task.lock();
        if guard.is_some() {
            return;
        }

        let weak: Weak<Self> = Arc::downgrade(self);
        let tick = Duration::from_millis(self.refresh_tick_ms);
        let kind = self.kind;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            // the first tick of tokio's interval fires immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let Some(controller) = weak.upgrade() else {
                    break;
                };
                controller.auto_refresh_if_stale();
            }
        });

        *guard = Some(handle);
        tracing::info!(
            kind = %kind.title(),
            tick_ms = self.refresh_tick_ms,
            staleness_ms = self.staleness_ms,
            "Background rate refresh started"
        );
    }

    /// Stop the background staleness check. No-op when not running.
    pub fn stop(&self) {
        if let Some(handle) = self.refresh_task.lock().take() {
            handle.abort();
            tracing::info!(kind = %self.kind.title(), "Background rate refresh stopped");
        }
    }

    fn auto_refresh_if_stale(&self) {
        let result = {
            let mut session = self.state.write();
            if !session.maybe_auto_refresh(self.staleness_ms) {
                return;
            }
            (SessionSnapshot::from(&*session), session.rate)
        };
        let (snapshot, rate) = result;
        tracing::debug!(kind = %self.kind.title(), "Stale rate refreshed");
        self.persist(&snapshot);
        if let Some(rate) = rate {
            self.notify(SessionEvent::RateRefreshed { rate });
        }
    }

    fn persist(&self, snapshot: &SessionSnapshot) {
        if let Err(e) = self.store.save(snapshot) {
            tracing::warn!(
                kind = %self.kind.title(),
                error = %e,
                "Failed to persist session; continuing in memory"
            );
        }
    }

    fn notify(&self, event: SessionEvent) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.try_send(event.clone()).is_ok());
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.stop();
    }
}
