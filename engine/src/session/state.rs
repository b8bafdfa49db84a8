//! # Swap Session State
//!
//! The explicit, serializable state of one in-progress conversion, plus the
//! pure transitions the controller drives. Every transition is a function
//! of "current state + event" only, so the state machine is testable
//! without a runtime, a UI tree, or a storage backend.

use chrono::Utc;
use shared::dto::session::SessionSnapshot;
use shared::dto::token::Token;
use shared::utils::{format_derived_amount, format_token_amount};

use crate::session::rates;
use crate::utils::validation::{is_valid_amount_input, parse_amount};

/// Which platform surface a session drives.
///
/// Swap and redeem share one state machine and one refresh policy; they
/// differ only in which durable slot the session persists to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// Buy a stablecoin with another token
    Swap,
    /// Redeem a stablecoin back out
    Redeem,
}

impl SessionKind {
    /// Name of the durable storage slot for this kind
    pub fn slot(&self) -> &'static str {
        match self {
            SessionKind::Swap => "swap-session",
            SessionKind::Redeem => "redeem-session",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            SessionKind::Swap => "Swap",
            SessionKind::Redeem => "Redeem",
        }
    }
}

/// The user's in-progress conversion intent.
///
/// `from_amount` is kept as the decimal text the user typed (possibly
/// partial, like `"12."`); `to_amount` is always derived. `rate` is units
/// of `to_token` per 1 unit of `from_token`. `last_updated` is unix
/// milliseconds of the last rate computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapSession {
    pub from_token: Option<Token>,
    pub to_token: Option<Token>,
    pub from_amount: String,
    pub to_amount: String,
    pub rate: Option<f64>,
    pub last_updated: Option<i64>,
}

impl SwapSession {
    /// Both sides of the pair are selected
    pub fn is_pair_complete(&self) -> bool {
        self.from_token.is_some() && self.to_token.is_some()
    }

    /// The rate is absent or older than the staleness window
    pub fn is_stale(&self, staleness_ms: u64) -> bool {
        self.is_stale_at(staleness_ms, now_ms())
    }

    fn is_stale_at(&self, staleness_ms: u64, now: i64) -> bool {
        match self.last_updated {
            Some(ts) => now.saturating_sub(ts) > staleness_ms as i64,
            None => true,
        }
    }

    /// Replace the source token. A typed amount is preserved; the computed
    /// rate belonged to the old pair and is discarded, then recomputed
    /// immediately when both sides are populated.
    pub fn select_from_token(&mut self, token: Token) {
        self.from_token = Some(token);
        self.on_pair_changed();
    }

    /// Replace the destination token. Same rate semantics as
    /// [`select_from_token`](Self::select_from_token).
    pub fn select_to_token(&mut self, token: Token) {
        self.to_token = Some(token);
        self.on_pair_changed();
    }

    fn on_pair_changed(&mut self) {
        self.rate = None;
        self.last_updated = None;
        if self.is_pair_complete() {
            self.refresh_rate();
        } else {
            self.rederive_to_amount();
        }
    }

    /// Accept or reject typed amount text.
    ///
    /// Returns `false` (no state change) for anything that is not
    /// decimal-or-empty input. On accept, stores the text verbatim and
    /// re-derives `to_amount`; a stale or missing rate is refreshed first
    /// when the pair is complete.
    pub fn set_from_amount(&mut self, text: &str, staleness_ms: u64) -> bool {
        if !is_valid_amount_input(text) {
            return false;
        }
        self.from_amount = text.to_string();
        if self.auto_refresh_due(staleness_ms) {
            self.refresh_rate();
        }
        self.rederive_to_amount();
        true
    }

    /// Shortcut: type the full on-hand amount of the source token.
    /// No-op without a source token.
    pub fn set_max(&mut self, staleness_ms: u64) -> bool {
        let Some(token) = &self.from_token else {
            return false;
        };
        let text = format_token_amount(token.amount);
        self.set_from_amount(&text, staleness_ms)
    }

    /// Shortcut: type half the on-hand amount of the source token.
    pub fn set_half(&mut self, staleness_ms: u64) -> bool {
        let Some(token) = &self.from_token else {
            return false;
        };
        let text = format_token_amount(token.amount / 2.0);
        self.set_from_amount(&text, staleness_ms)
    }

    /// Recompute the rate for the current pair and stamp `last_updated`.
    /// No-op (returns `false`) while either side is missing.
    pub fn refresh_rate(&mut self) -> bool {
        match rates::quote_rate(self.from_token.as_ref(), self.to_token.as_ref()) {
            Some(rate) => {
                self.rate = Some(rate);
                self.last_updated = Some(now_ms());
                self.rederive_to_amount();
                true
            }
            None => false,
        }
    }

    /// Reverse the trade direction, preserving its economic state.
    ///
    /// Tokens swap sides, the rate inverts arithmetically (jitter is frozen,
    /// not re-sampled), and the derived amount becomes the typed one and
    /// vice versa. With nothing derived yet there is nothing valid to carry
    /// over, so both amounts clear. No-op while either side is missing.
    pub fn switch_tokens(&mut self) -> bool {
        if !self.is_pair_complete() {
            return false;
        }
        std::mem::swap(&mut self.from_token, &mut self.to_token);
        self.rate = self.rate.map(invert_rate);
        if self.to_amount.is_empty() {
            self.from_amount.clear();
        } else {
            std::mem::swap(&mut self.from_amount, &mut self.to_amount);
        }
        self.last_updated = Some(now_ms());
        true
    }

    /// Run the automatic staleness check: refresh when the pair is
    /// complete, an amount is present, and the rate is missing or stale.
    pub fn maybe_auto_refresh(&mut self, staleness_ms: u64) -> bool {
        if self.auto_refresh_due(staleness_ms) {
            self.refresh_rate()
        } else {
            false
        }
    }

    fn auto_refresh_due(&self, staleness_ms: u64) -> bool {
        self.is_pair_complete()
            && !self.from_amount.is_empty()
            && (self.rate.is_none() || self.is_stale(staleness_ms))
    }

    fn rederive_to_amount(&mut self) {
        self.to_amount = match (parse_amount(&self.from_amount), self.rate) {
            (Some(amount), Some(rate)) => format_derived_amount(amount * rate),
            _ => String::new(),
        };
    }
}

/// Invert a rate, guarding a zero denominator to 0 rather than Inf/NaN.
fn invert_rate(rate: f64) -> f64 {
    if rate == 0.0 {
        0.0
    } else {
        1.0 / rate
    }
}

/// Current wall-clock time in unix milliseconds
pub(crate) fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

impl From<SessionSnapshot> for SwapSession {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            from_token: snapshot.from_token,
            to_token: snapshot.to_token,
            from_amount: snapshot.from_amount,
            to_amount: snapshot.to_amount,
            rate: snapshot.rate,
            last_updated: snapshot.last_updated,
        }
    }
}

impl From<&SwapSession> for SessionSnapshot {
    fn from(session: &SwapSession) -> Self {
        Self {
            from_token: session.from_token.clone(),
            to_token: session.to_token.clone(),
            from_amount: session.from_amount.clone(),
            to_amount: session.to_amount.clone(),
            rate: session.rate,
            last_updated: session.last_updated,
        }
    }
}
