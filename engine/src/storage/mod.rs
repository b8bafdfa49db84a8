//! # Session Persistence
//!
//! The durable-storage port for swap/redeem sessions, plus its adapters.
//! One store instance is bound to one named slot. Persistence is a
//! convenience, not a correctness requirement: the controller writes
//! through after every mutation and logs-and-continues when a save fails,
//! and an unreadable slot loads as "no prior session".

use shared::dto::session::SessionSnapshot;
use thiserror::Error;

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::{MemoryStore, NullStore};

/// Storage adapter failure
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable slot for one session.
///
/// Implementations must be callable from the controller's background task,
/// hence `Send + Sync`.
pub trait SessionStore: Send + Sync {
    /// Overwrite the slot with `snapshot`
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError>;

    /// Read the slot. `None` means empty, absent, or unparsable; the
    /// caller starts from an empty session either way.
    fn load(&self) -> Option<SessionSnapshot>;
}
