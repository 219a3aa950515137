pub use crate::error::{Error, SkResult, ValidationError};
pub use crate::types::{SiteId, TypeTag};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
