//! Per-request site resolution.
//!
//! Every request resolves its website through the Host header. Resolution is
//! cached per host for the website's own `cache_period`, so one website's
//! refresh cadence never affects another's. Unknown hosts resolve to a
//! transient default website instead of failing, which keeps a fresh install
//! serving pages before any configuration exists.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::core::cache::TtlCache;
use crate::prelude::*;
use crate::site_adapter::{Division, SiteAdapter, Website};

/// A resolved website plus its root division, if one is configured and active.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContext {
	pub website: Website,
	pub division: Option<Division>,
}

pub struct SiteContextService {
	adapter: Arc<dyn SiteAdapter>,
	website_cache: TtlCache<Box<str>, Website>,
	context_cache: TtlCache<Box<str>, SiteContext>,
}

impl SiteContextService {
	pub fn new(adapter: Arc<dyn SiteAdapter>, cache_capacity: usize) -> Self {
		SiteContextService {
			adapter,
			website_cache: TtlCache::new(cache_capacity),
			context_cache: TtlCache::new(cache_capacity),
		}
	}

	/// The website serving `host`. Unknown hosts get a transient default;
	/// see [`Website::default_for_host`].
	pub async fn get_website(&self, host: &str) -> SkResult<Website> {
		if let Some(website) = self.website_cache.get(host) {
			debug!("website cache hit for {}", host);
			return Ok(website);
		}

		let website = match self.adapter.read_website(host).await {
			Ok(website) => website,
			Err(Error::NotFound) => {
				info!("no website configured for {}, using defaults", host);
				Website::default_for_host(host)
			}
			Err(err) => return Err(err),
		};

		let ttl = Duration::from_secs(u64::from(website.cache_period));
		self.website_cache.put(host.into(), website.clone(), ttl);
		Ok(website)
	}

	/// The full per-request context for `host`: the website and its root
	/// division. The division is `None` when the website is transient, the
	/// configured root division does not exist, or it is inactive.
	pub async fn get_site_context(&self, host: &str) -> SkResult<SiteContext> {
		if let Some(ctx) = self.context_cache.get(host) {
			debug!("site context cache hit for {}", host);
			return Ok(ctx);
		}

		let website = self.get_website(host).await?;
		let division = if website.site_id.is_transient() {
			None
		} else {
			match self.adapter.read_division(website.site_id, &website.root_division).await {
				Ok(division) if division.active => Some(division),
				Ok(_) => None,
				Err(Error::NotFound) => None,
				Err(err) => return Err(err),
			}
		};

		let ttl = Duration::from_secs(u64::from(website.cache_period));
		let ctx = SiteContext { website, division };
		self.context_cache.put(host.into(), ctx.clone(), ttl);
		Ok(ctx)
	}

	/// Drop any cached resolution for `host`. Called after every write that
	/// can change what the host serves.
	pub fn invalidate(&self, host: &str) {
		self.website_cache.invalidate(host);
		self.context_cache.invalidate(host);
	}
}


// vim: ts=4
