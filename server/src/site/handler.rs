//! Site context HTTP handler.

use axum::extract::State;
use axum::Json;

use crate::api::ApiResponse;
use crate::core::extract::SiteHost;
use crate::prelude::*;
use crate::site::SiteContext;

pub async fn get_site_context(
	State(app): State<App>,
	SiteHost(host): SiteHost,
) -> SkResult<Json<ApiResponse<SiteContext>>> {
	let ctx = app.site.get_site_context(&host).await?;
	Ok(Json(ApiResponse::new(ctx)))
}

// vim: ts=4
