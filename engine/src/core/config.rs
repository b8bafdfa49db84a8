//! # Engine Configuration
//!
//! JSON-file configuration for the client engine: where session slots live,
//! which backend serves the token catalog, and the rate-refresh policy.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::{EngineError, Result};
use crate::session::SessionKind;

/// Default backend API base URL
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3001";
/// Rate staleness window: 15 minutes
pub const DEFAULT_STALENESS_MS: u64 = 15 * 60 * 1000;
/// Background staleness check period: 30 seconds
pub const DEFAULT_REFRESH_TICK_MS: u64 = 30 * 1000;

/// Serializable engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Backend API base URL for the token catalog
    pub api_base_url: String,
    /// Directory holding the per-kind session slots
    pub data_dir: PathBuf,
    /// Maximum rate age before the automatic refresh fires, in milliseconds
    pub staleness_ms: u64,
    /// Background staleness check period, in milliseconds
    pub refresh_tick_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_dir: PathBuf::from("."),
            staleness_ms: DEFAULT_STALENESS_MS,
            refresh_tick_ms: DEFAULT_REFRESH_TICK_MS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()))
        {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded engine configuration");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load engine config. Using defaults.");
                Self::default()
            }
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| EngineError::Config(e.to_string()))?;
            }
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| EngineError::Config(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| EngineError::Config(e.to_string()))?;
        Ok(())
    }

    /// Path of the durable slot for one session kind
    pub fn session_path(&self, kind: SessionKind) -> PathBuf {
        self.data_dir.join(format!("{}.json", kind.slot()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.staleness_ms, 900_000);
        assert_eq!(config.refresh_tick_ms, 30_000);
        assert_eq!(
            config.session_path(SessionKind::Swap),
            PathBuf::from("./swap-session.json")
        );
        assert_eq!(
            config.session_path(SessionKind::Redeem),
            PathBuf::from("./redeem-session.json")
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load_or_default(Path::new("./no-such-config.json"));
        assert_eq!(config, EngineConfig::default());
    }
}
