//! JSON envelope for the HTTP surface.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
	pub data: T,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		ApiResponse { data }
	}
}

// vim: ts=4
