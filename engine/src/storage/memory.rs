//! In-memory and null-object session slots

use parking_lot::Mutex;
use shared::dto::session::SessionSnapshot;

use super::{SessionStore, StorageError};

/// Keeps the session in process memory. Used by tests and as the in-session
/// fallback when durable storage is unavailable.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<SessionSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        *self.slot.lock() = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Option<SessionSnapshot> {
        self.slot.lock().clone()
    }
}

/// Persistence disabled: saves succeed and vanish, loads find nothing.
#[derive(Default)]
pub struct NullStore;

impl NullStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for NullStore {
    fn save(&self, _snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        Ok(())
    }

    fn load(&self) -> Option<SessionSnapshot> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);

        let snapshot = SessionSnapshot {
            from_amount: "42".to_string(),
            ..SessionSnapshot::default()
        };
        store.save(&snapshot).unwrap();
        assert_eq!(store.load(), Some(snapshot));
    }

    #[test]
    fn test_null_store_swallows_saves() {
        let store = NullStore::new();
        store.save(&SessionSnapshot::default()).unwrap();
        assert_eq!(store.load(), None);
    }
}
