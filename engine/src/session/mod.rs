//! # Swap/Redeem Session
//!
//! The rate-and-state engine behind the platform's swap and redeem
//! surfaces: a pure state machine ([`state`]), a pure rate generator
//! ([`rates`]), and a controller ([`controller`]) that adds persistence,
//! observers, and the background staleness check on top.

pub mod controller;
pub mod events;
pub mod rates;
pub mod state;

pub use controller::SessionController;
pub use events::SessionEvent;
pub use state::{SessionKind, SwapSession};
