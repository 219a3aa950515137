//! Shared types, the storage adapter trait, and error types for the sitekit
//! multi-site platform.
//!
//! This crate contains everything that is shared between the server crate
//! and the storage adapter implementations. Keeping it separate lets adapter
//! crates compile in parallel with the server's feature modules.

pub mod error;
pub mod prelude;
pub mod site_adapter;
pub mod types;

// vim: ts=4
