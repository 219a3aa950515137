//! Division HTTP handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::ApiResponse;
use crate::core::extract::SiteHost;
use crate::division::RenderContext;
use crate::prelude::*;
use crate::site_adapter::Division;

/// Division detail: the stored row plus derived tree views.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionDetail {
	#[serde(flatten)]
	pub division: Division,
	pub path: String,
	pub children: Vec<Division>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDivisionRequest {
	#[serde(default = "default_active")]
	pub active: bool,
	pub classes: Option<Box<str>>,
	pub parent: Option<Box<str>>,
	#[serde(default)]
	pub order: i64,
	pub pre_template_html: Option<Box<str>>,
	pub template_filename: Option<Box<str>>,
	pub post_template_html: Option<Box<str>>,
	#[serde(default)]
	pub suppress_div: bool,
	#[serde(default)]
	pub use_span: bool,
	pub included_pages: Option<Box<str>>,
	pub excluded_pages: Option<Box<str>>,
	pub cache_period: Option<u32>,
}

fn default_active() -> bool {
	true
}

#[derive(Debug, Deserialize)]
pub struct RenderQuery {
	pub path: String,
}

pub async fn list_divisions(
	State(app): State<App>,
	SiteHost(host): SiteHost,
) -> SkResult<Json<ApiResponse<Vec<Division>>>> {
	let website = app.site.get_website(&host).await?;
	let divisions = app.divisions.list(website.site_id).await?;
	Ok(Json(ApiResponse::new(divisions)))
}

pub async fn get_division(
	State(app): State<App>,
	SiteHost(host): SiteHost,
	Path(name): Path<String>,
) -> SkResult<Json<ApiResponse<DivisionDetail>>> {
	let website = app.site.get_website(&host).await?;
	let division = app.divisions.read(website.site_id, &name).await?;
	let path = app.divisions.path(&division).await?;
	let children = app.divisions.children(&division).await?;
	Ok(Json(ApiResponse::new(DivisionDetail { division, path, children })))
}

pub async fn put_division(
	State(app): State<App>,
	SiteHost(host): SiteHost,
	Path(name): Path<String>,
	Json(req): Json<UpdateDivisionRequest>,
) -> SkResult<Json<ApiResponse<Division>>> {
	let website = app.site.get_website(&host).await?;
	if website.site_id.is_transient() {
		return Err(Error::BadRequest("website is not persisted"));
	}

	let mut division = Division::new(website.site_id, &name);
	division.active = req.active;
	division.classes = req.classes.unwrap_or_default();
	division.parent = req.parent;
	division.order = req.order;
	division.pre_template_html = req.pre_template_html.unwrap_or_default();
	division.template_filename = req.template_filename.unwrap_or_default();
	division.post_template_html = req.post_template_html.unwrap_or_default();
	division.suppress_div = req.suppress_div;
	division.use_span = req.use_span;
	division.included_pages = req.included_pages.unwrap_or_default();
	division.excluded_pages = req.excluded_pages.unwrap_or_default();
	if let Some(cache_period) = req.cache_period {
		division.cache_period = cache_period;
	}

	let division = app.divisions.save(division).await?;
	app.site.invalidate(&host);
	Ok(Json(ApiResponse::new(division)))
}

pub async fn delete_division(
	State(app): State<App>,
	SiteHost(host): SiteHost,
	Path(name): Path<String>,
) -> SkResult<StatusCode> {
	let website = app.site.get_website(&host).await?;
	if website.site_id.is_transient() {
		return Err(Error::BadRequest("website is not persisted"));
	}

	app.divisions.delete(website.site_id, &name).await?;
	app.site.invalidate(&host);
	Ok(StatusCode::NO_CONTENT)
}

pub async fn get_render_context(
	State(app): State<App>,
	SiteHost(host): SiteHost,
	Path(name): Path<String>,
	Query(query): Query<RenderQuery>,
) -> SkResult<Json<ApiResponse<RenderContext>>> {
	let website = app.site.get_website(&host).await?;
	let division = app.divisions.read(website.site_id, &name).await?;
	let ctx = app.divisions.render_context(division, &query.path)?;
	Ok(Json(ApiResponse::new(ctx)))
}

// vim: ts=4
