//! Request extractors.

use axum::{
	extract::FromRequestParts,
	http::{header, request::Parts},
};

use crate::prelude::*;

// SiteHost //
//**********//

/// The site identity of the request: the Host header with any port stripped.
#[derive(Clone, Debug)]
pub struct SiteHost(pub Box<str>);

impl<S> FromRequestParts<S> for SiteHost
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let host = parts
			.headers
			.get(header::HOST)
			.and_then(|value| value.to_str().ok())
			.ok_or(Error::BadRequest("missing Host header"))?;
		Ok(SiteHost(strip_port(host).into()))
	}
}

/// Drop a trailing `:port`, leaving IPv6 literals intact.
fn strip_port(host: &str) -> &str {
	match host.rfind(':') {
		Some(idx) if host[idx + 1..].bytes().all(|b| b.is_ascii_digit()) => &host[..idx],
		_ => host,
	}
}


// vim: ts=4
