//! Division trees: per-website hierarchies of renderable content regions.
//!
//! - **Service** (`service.rs`): tree traversal (children, path, level),
//!   the save path that recomputes derived fields, and render decisions
//! - **Matcher** (`matcher.rs`): compiled page include/exclude pattern lists
//! - **Handler** (`handler.rs`): HTTP API endpoints

pub mod handler;
pub mod matcher;
pub mod service;

pub use matcher::{PatternCache, PatternList};
pub use service::{DivisionService, RenderContext, LEVEL_SENTINEL, MAX_TREE_DEPTH, PATH_SENTINEL};

// vim: ts=4
