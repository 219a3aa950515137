pub use crate::core::app::App;
pub use sitekit_types::error::{Error, SkResult, ValidationError};
pub use sitekit_types::types::{SiteId, TypeTag};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
