//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity. The token catalog is an external collaborator; the engine
//! only knows this contract, never a concrete backend.

use async_trait::async_trait;
use shared::dto::token::Token;

/// Trait for token catalog operations
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Get the sovereign-bond stablecoins available on the platform
    async fn fetch_stablecoins(&self) -> Result<Vec<Token>, String>;

    /// Get every tradable token, stablecoins included
    async fn fetch_tokens(&self) -> Result<Vec<Token>, String>;
}
