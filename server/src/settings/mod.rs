//! Typed per-site settings.
//!
//! - **Value codec** (`value.rs`): validation and coercion of stored text
//!   against the declared type tag
//! - **Service** (`service.rs`): per-host settings map with TTL caching
//! - **Handler** (`handler.rs`): HTTP API endpoints

pub mod handler;
pub mod service;
pub mod value;

pub use service::{SettingsMap, SettingsService};
pub use value::{TypedScalar, ValueCodec};

// vim: ts=4
