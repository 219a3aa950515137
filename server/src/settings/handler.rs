//! Settings HTTP handlers.

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::Deserialize;

use crate::api::ApiResponse;
use crate::core::extract::SiteHost;
use crate::prelude::*;
use crate::settings::service::SettingsMap;
use crate::settings::value::TypedScalar;
use crate::site_adapter::Setting;

/// GET /settings - the coerced settings map of the request host.
pub async fn list_settings(
	State(app): State<App>,
	SiteHost(host): SiteHost,
) -> SkResult<Json<ApiResponse<SettingsMap>>> {
	let settings = app.settings.get_settings(&host).await?;
	Ok(Json(ApiResponse::new(settings.as_ref().clone())))
}

/// GET /settings/{key} - a single coerced setting, 404 when absent.
pub async fn get_setting(
	State(app): State<App>,
	SiteHost(host): SiteHost,
	Path(key): Path<String>,
) -> SkResult<Json<ApiResponse<TypedScalar>>> {
	let value = app.settings.get_setting(&host, &key, None).await?;
	Ok(Json(ApiResponse::new(value)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingRequest {
	pub value: String,
	#[serde(rename = "type")]
	pub typ: TypeTag,
}

/// PUT /settings/{key} - validate and persist; 422 on a typed parse failure.
pub async fn put_setting(
	State(app): State<App>,
	SiteHost(host): SiteHost,
	Path(key): Path<String>,
	Json(req): Json<UpdateSettingRequest>,
) -> SkResult<Json<ApiResponse<Setting>>> {
	let setting = app.settings.set_setting(&host, &key, &req.value, req.typ).await?;
	Ok(Json(ApiResponse::new(setting)))
}

/// DELETE /settings/{key}
pub async fn delete_setting(
	State(app): State<App>,
	SiteHost(host): SiteHost,
	Path(key): Path<String>,
) -> SkResult<StatusCode> {
	app.settings.delete_setting(&host, &key).await?;
	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
