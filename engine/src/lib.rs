//! # Stablefolio Client Engine - Library Root
//!
//! The headless client core of a sovereign-bond stablecoin investment
//! platform. This crate owns the swap/redeem session engine: pair
//! selection, rate derivation, amount consistency, background refresh, and
//! durable session persistence. Rendering, routing, and authentication
//! belong to the shells that embed it.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                 engine (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  session     - state machine, rates, controller        │
//! │  storage     - session slot port + adapters            │
//! │  services    - token catalog client                    │
//! │  portfolio   - holdings valuation                      │
//! │  Tokio       - background staleness check              │
//! │  Reqwest     - catalog HTTP boundary                   │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP                         │ JSON file
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Backend API    │          │   Session slot          │
//! │  (catalog)      │          │   (swap/redeem .json)   │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **session**: The swap/redeem engine
//!   - `state`: explicit session state + pure transitions
//!   - `rates`: pair/fiat rate tables with bounded jitter
//!   - `controller`: shared state, write-through persistence, observers,
//!     explicit start/stop refresh lifecycle
//!   - `events`: change notifications for subscribers
//!
//! - **storage**: `SessionStore` port with JSON-file, in-memory, and
//!   null-object adapters
//!
//! - **services**: External integrations
//!   - `catalog`: backend HTTP client for the token catalog
//!
//! - **portfolio**: Pure valuation over catalog holdings
//!
//! - **core**: Cross-cutting pieces (config, errors, service traits)
//!
//! ## State Management Pattern
//!
//! The controller holds `Arc<RwLock<SwapSession>>`; every transition is a
//! pure function applied under the lock, then written through to storage
//! and broadcast to subscribers over `async_channel`. Locks are never held
//! across an `.await`.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use engine::core::config::EngineConfig;
//! use engine::session::{SessionController, SessionKind};
//! use engine::storage::JsonFileStore;
//!
//! let config = EngineConfig::default();
//! let store = Arc::new(JsonFileStore::new(config.session_path(SessionKind::Swap)));
//! let controller = Arc::new(SessionController::new(SessionKind::Swap, store, &config));
//!
//! let events = controller.subscribe();
//! controller.set_from_amount("1000");
//! controller.start(); // background staleness check
//! ```

pub mod core;
pub mod portfolio;
pub mod services;
pub mod session;
pub mod storage;
pub mod utils;
