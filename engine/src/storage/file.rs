//! JSON-file session slot

use shared::dto::session::SessionSnapshot;
use std::path::{Path, PathBuf};

use super::{SessionStore, StorageError};

/// Stores the session as pretty-printed JSON at a fixed path.
///
/// The parent directory is created on demand. Loading tolerates a missing,
/// empty, or corrupted file by reporting "no prior session".
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileStore {
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn load(&self) -> Option<SessionSnapshot> {
        if !self.path.exists() {
            return None;
        }
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read session slot");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding unparsable session slot");
                None
            }
        }
    }
}
