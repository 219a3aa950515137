//! Site context resolution.

pub mod handler;
pub mod service;

pub use service::{SiteContext, SiteContextService};

// vim: ts=4
