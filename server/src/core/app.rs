//! App state type and builder.

use std::sync::Arc;

use crate::division::service::DivisionService;
use crate::prelude::*;
use crate::settings::service::SettingsService;
use crate::settings::value::ValueCodec;
use crate::site::service::SiteContextService;
use crate::site_adapter::SiteAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub site_adapter: Arc<dyn SiteAdapter>,
	pub settings: SettingsService,
	pub divisions: DivisionService,
	pub site: SiteContextService,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	listen: Box<str>,
	/// Legacy boolean coercion: any non-empty setting value counts as true.
	lenient_bool: bool,
	cache_capacity: usize,
	pattern_cache_capacity: usize,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	site_adapter: Option<Arc<dyn SiteAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				lenient_bool: false,
				cache_capacity: 64,
				pattern_cache_capacity: 256,
			},
			site_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }
	pub fn lenient_bool(&mut self, lenient_bool: bool) -> &mut Self { self.opts.lenient_bool = lenient_bool; self }
	pub fn cache_capacity(&mut self, cache_capacity: usize) -> &mut Self { self.opts.cache_capacity = cache_capacity; self }
	pub fn pattern_cache_capacity(&mut self, pattern_cache_capacity: usize) -> &mut Self { self.opts.pattern_cache_capacity = pattern_cache_capacity; self }

	// Adapters
	pub fn site_adapter(&mut self, site_adapter: Arc<dyn SiteAdapter>) -> &mut Self { self.site_adapter = Some(site_adapter); self }

	pub fn build(&mut self) -> SkResult<App> {
		let site_adapter =
			self.site_adapter.take().ok_or(Error::Config("site adapter is required"))?;
		let opts = std::mem::replace(&mut self.opts, AppBuilder::new().opts);

		let codec = ValueCodec::new(opts.lenient_bool);
		let settings = SettingsService::new(site_adapter.clone(), codec, opts.cache_capacity);
		let divisions =
			DivisionService::new(site_adapter.clone(), opts.pattern_cache_capacity);
		let site = SiteContextService::new(site_adapter.clone(), opts.cache_capacity);

		info!("sitekit {} configured, listen={}", VERSION, opts.listen);

		Ok(Arc::new(AppState { opts, site_adapter, settings, divisions, site }))
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl AppState {
	pub fn listen(&self) -> &str {
		&self.opts.listen
	}
}

// vim: ts=4
