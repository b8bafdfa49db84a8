//! # Session Events
//!
//! Notifications delivered to subscribers after each mutating transition.
//! Exactly one event is emitted per accepted transition; rejected input and
//! no-op transitions emit nothing. Subscribers read the full state via
//! [`snapshot`](crate::session::SessionController::snapshot); events carry
//! just enough to know what changed.

/// Change notification for one session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The source token was replaced
    FromTokenSelected { symbol: String },
    /// The destination token was replaced
    ToTokenSelected { symbol: String },
    /// The typed amount changed (directly or via max/half)
    AmountChanged {
        from_amount: String,
        to_amount: String,
    },
    /// The rate was recomputed (manual refresh or staleness check)
    RateRefreshed { rate: f64 },
    /// The pair was flipped
    TokensSwitched,
}
