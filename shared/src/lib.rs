//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the client engine and the
//! platform's backend API, plus the on-disk shape of a persisted session.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::token`]**: Token catalog DTOs (tokens, stablecoins)
//!   - **[`dto::session`]**: Persisted swap/redeem session snapshot
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_token_amount`]**: Format a holding for amount entry
//!   - **[`utils::format_derived_amount`]**: Format a derived amount to 6 dp
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
