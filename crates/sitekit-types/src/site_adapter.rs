//! Storage adapter trait for websites, settings, and divisions.
//!
//! Adapters persist the three logical tables and nothing more. Derived
//! division fields (`level`, `level_order`) are computed by the server's
//! division save path; adapters store what they are handed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::error::SkResult;
use crate::types::{SiteId, TypeTag};

/// Cache TTL used when no website row exists for the current host.
pub const DEFAULT_CACHE_PERIOD: u32 = 300;

/// Default name of the root division of a website.
pub const DEFAULT_ROOT_DIVISION: &str = "root";

// Website //
//*********//

/// Per-host configuration record. Exactly one per host; callers that
/// tolerate absence operate on [`Website::default_for_host`] instead.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
	#[serde(rename = "id")]
	pub site_id: SiteId,
	pub host: Box<str>,
	/// HTML fragment inserted in the HEAD tag area of the default template.
	#[serde(default)]
	pub head_html: Box<str>,
	/// HTML fragment inserted in the footer area of the default template.
	#[serde(default)]
	pub footer_html: Box<str>,
	/// Opaque asset handles; upload and storage live in an external asset store.
	pub logo: Option<Box<str>>,
	pub icon: Option<Box<str>>,
	pub style_sheet: Option<Box<str>>,
	#[serde(default)]
	pub slogan: Box<str>,
	#[serde(default)]
	pub feed_title: Box<str>,
	#[serde(default)]
	pub feed_description: Box<str>,
	#[serde(default)]
	pub feed_icon_url: Box<str>,
	/// Name of the root of the division tree for this website.
	pub root_division: Box<str>,
	/// Seconds that cached per-site data is kept before being reloaded.
	pub cache_period: u32,
}

impl Website {
	/// Transient, unsaved website bound to a host with no stored row.
	pub fn default_for_host(host: &str) -> Self {
		Website {
			site_id: SiteId(0),
			host: host.into(),
			head_html: "".into(),
			footer_html: "".into(),
			logo: None,
			icon: None,
			style_sheet: None,
			slogan: "".into(),
			feed_title: "".into(),
			feed_description: "".into(),
			feed_icon_url: "".into(),
			root_division: DEFAULT_ROOT_DIVISION.into(),
			cache_period: DEFAULT_CACHE_PERIOD,
		}
	}
}

// Setting //
//*********//

/// A typed key/value configuration entry scoped to one website.
///
/// `value` is stored as text and must parse under `typ`; that is enforced
/// at write time and again defensively when the settings map is loaded.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
	pub site_id: SiteId,
	pub key: Box<str>,
	pub value: Box<str>,
	#[serde(rename = "type")]
	pub typ: TypeTag,
}

// Division //
//**********//

/// A node in a per-website tree of renderable content regions.
///
/// The tree is linked by parent *name*: children lookups match on the
/// parent's name, not its row identity. `level` and `level_order` are
/// derived from the parent chain on every save and are never set directly.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
	pub site_id: SiteId,
	/// Also used as the id of the generated div/span tag.
	pub name: Box<str>,
	/// Inactive divisions and their descendants are ignored by traversal.
	pub active: bool,
	/// Space separated CSS classes for the generated tag.
	pub classes: Box<str>,
	/// Name of the parent division; None only for a root division.
	pub parent: Option<Box<str>>,
	/// Position of this division relative to its siblings.
	pub order: i64,
	/// Derived depth from the root; 0 for roots, -1 when a cycle was detected.
	pub level: i64,
	/// Derived `"{level:04}.{order:04}"` global sort key.
	pub level_order: Box<str>,
	pub pre_template_html: Box<str>,
	/// Template to embed inside this division; rendered by an external engine.
	pub template_filename: Box<str>,
	pub post_template_html: Box<str>,
	/// Emit no wrapping tag at all.
	pub suppress_div: bool,
	/// Wrap in a span tag instead of a div.
	pub use_span: bool,
	/// Whitespace-separated regex patterns of pages to render this division on.
	pub included_pages: Box<str>,
	/// Whitespace-separated regex patterns of pages to skip this division on.
	pub excluded_pages: Box<str>,
	/// Seconds the rendered division is cached by the default templates.
	pub cache_period: u32,
}

impl Division {
	/// A fresh division with field defaults; derived fields are filled in
	/// by the save path.
	pub fn new(site_id: SiteId, name: &str) -> Self {
		Division {
			site_id,
			name: name.into(),
			active: true,
			classes: "".into(),
			parent: None,
			order: 0,
			level: 0,
			level_order: "".into(),
			pre_template_html: "".into(),
			template_filename: "".into(),
			post_template_html: "".into(),
			suppress_div: false,
			use_span: false,
			included_pages: "".into(),
			excluded_pages: "".into(),
			cache_period: DEFAULT_CACHE_PERIOD,
		}
	}
}

// SiteAdapter //
//*************//

/// Storage contract for the three logical tables.
///
/// Lookups that find nothing return [`Error::NotFound`](crate::error::Error);
/// list operations return divisions ordered by `level_order`.
#[async_trait]
pub trait SiteAdapter: Debug + Send + Sync {
	// Websites
	async fn read_website(&self, host: &str) -> SkResult<Website>;
	/// Insert or update by host. Returns the stored site id (a fresh one
	/// when the website had none).
	async fn upsert_website(&self, website: &Website) -> SkResult<SiteId>;

	// Settings
	async fn list_settings(&self, site_id: SiteId) -> SkResult<Vec<Setting>>;
	async fn read_setting(&self, site_id: SiteId, key: &str) -> SkResult<Setting>;
	async fn upsert_setting(&self, setting: &Setting) -> SkResult<()>;
	async fn delete_setting(&self, site_id: SiteId, key: &str) -> SkResult<()>;

	// Divisions
	async fn read_division(&self, site_id: SiteId, name: &str) -> SkResult<Division>;
	/// All divisions of a website in `level_order`.
	async fn list_divisions(&self, site_id: SiteId) -> SkResult<Vec<Division>>;
	/// Active divisions whose parent *name* equals `parent`, in `level_order`.
	async fn list_children(&self, site_id: SiteId, parent: &str) -> SkResult<Vec<Division>>;
	async fn upsert_division(&self, division: &Division) -> SkResult<()>;
	async fn delete_division(&self, site_id: SiteId, name: &str) -> SkResult<()>;
}

// vim: ts=4
