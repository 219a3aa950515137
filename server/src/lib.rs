//! Sitekit lets one deployment serve multiple websites, identified by host.
//!
//! # Features
//!
//! - Per-host website records (branding fragments, feed metadata, cache policy)
//! - Typed key/value settings with validation, coercion, and a per-site
//!   TTL cache
//! - A tree of named content regions ("divisions") with derived depth and
//!   display ordering, cycle-guarded traversal, and per-page
//!   include/exclude render matching
//! - Site context resolution (website + root division) with its own cache
//!
//! Storage is pluggable through the [`site_adapter::SiteAdapter`] trait;
//! admin tooling and template rendering are external collaborators that go
//! through the HTTP surface in [`routes`].

// Re-export shared types and the adapter trait from sitekit-types
pub use sitekit_types::error;
pub use sitekit_types::site_adapter;
pub use sitekit_types::types;

pub mod core;
pub mod division;
pub mod prelude;
pub mod routes;
pub mod settings;
pub mod site;

mod api;

#[cfg(test)]
pub(crate) mod test_util;

pub use crate::core::app::{App, AppBuilder};
pub use crate::core::webserver::serve;

// vim: ts=4
