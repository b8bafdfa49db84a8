//! # Data Transfer Objects (DTOs)
//!
//! Data structures shared between the client engine, the backend REST API,
//! and the local session storage slot.
//!
//! ## Module Organization
//!
//! - [`token`] - Token descriptors and catalog responses
//! - [`session`] - Persisted swap/redeem session snapshot
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod session;
pub mod token;

pub use session::*;
pub use token::*;
