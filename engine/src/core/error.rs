//! # Common Error Types
//!
//! Consolidated error handling for the client engine.
//!
//! Nothing in the session state machine itself returns these: invalid input
//! is rejected at the boundary and a missing pair simply means "no rate".
//! [`EngineError`] covers the fallible edges (catalog fetches, storage
//! adapters, configuration) for callers that need a typed error.

use thiserror::Error;

use crate::storage::StorageError;

/// Engine-wide error type.
///
/// - **Catalog**: token catalog fetch failures (network, HTTP status, JSON)
/// - **Storage**: session slot I/O or serialization failures
/// - **Validation**: rejected input surfaced as an error by callers that
///   want one (the state machine itself rejects silently)
/// - **Config**: configuration file problems
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the engine crate
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<String> for EngineError {
    fn from(msg: String) -> Self {
        EngineError::Catalog(msg)
    }
}

impl From<&str> for EngineError {
    fn from(msg: &str) -> Self {
        EngineError::Catalog(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EngineError::Catalog("connection refused".to_string()).to_string(),
            "Catalog error: connection refused"
        );
        assert_eq!(
            EngineError::Validation("amount must be numeric".to_string()).to_string(),
            "Validation error: amount must be numeric"
        );
    }
}
