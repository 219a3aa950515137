//! Settings service: loads, coerces, and caches the per-site settings map.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::core::cache::TtlCache;
use crate::prelude::*;
use crate::settings::value::{TypedScalar, ValueCodec};
use crate::site_adapter::{Setting, SiteAdapter};

pub type SettingsMap = HashMap<Box<str>, TypedScalar>;

/// Per-host settings with a TTL cache.
///
/// The cache is keyed by host so entries of different sites never shadow
/// each other. TTL is the owning website's `cache_period`.
pub struct SettingsService {
	adapter: Arc<dyn SiteAdapter>,
	codec: ValueCodec,
	cache: TtlCache<Box<str>, Arc<SettingsMap>>,
}

impl SettingsService {
	pub fn new(adapter: Arc<dyn SiteAdapter>, codec: ValueCodec, cache_capacity: usize) -> Self {
		SettingsService { adapter, codec, cache: TtlCache::new(cache_capacity) }
	}

	/// The full coerced settings map of the website serving `host`.
	///
	/// A missing website is a hard `NotFound` here: settings are meaningless
	/// without one. A stored value that no longer parses under its declared
	/// type fails the whole load; a bad value must not silently vanish from
	/// the settings view.
	pub async fn get_settings(&self, host: &str) -> SkResult<Arc<SettingsMap>> {
		if let Some(map) = self.cache.get(host) {
			debug!("settings cache hit: {}", host);
			return Ok(map);
		}

		let website = self.adapter.read_website(host).await?;
		let settings = self.adapter.list_settings(website.site_id).await?;

		let mut map = SettingsMap::with_capacity(settings.len());
		for setting in settings {
			let value = self.codec.coerce(&setting.value, setting.typ).map_err(|err| {
				warn!("setting {}:{} failed coercion: {}", host, setting.key, err);
				Error::Validation(err)
			})?;
			map.insert(setting.key, value);
		}

		let map = Arc::new(map);
		self.cache.put(
			host.into(),
			map.clone(),
			Duration::from_secs(u64::from(website.cache_period)),
		);
		Ok(map)
	}

	/// One setting by key. A missing key returns `default` when one was
	/// provided — including falsy values like `Int(0)` or `Text("")` — and
	/// `NotFound` otherwise.
	pub async fn get_setting(
		&self,
		host: &str,
		key: &str,
		default: Option<TypedScalar>,
	) -> SkResult<TypedScalar> {
		match self.get_settings(host).await?.get(key) {
			Some(value) => Ok(value.clone()),
			None => default.ok_or(Error::NotFound),
		}
	}

	/// Validate and persist a setting, then drop the host's cache slot.
	pub async fn set_setting(
		&self,
		host: &str,
		key: &str,
		value: &str,
		typ: TypeTag,
	) -> SkResult<Setting> {
		self.codec.validate(value, typ)?;

		let website = self.adapter.read_website(host).await?;
		let setting =
			Setting { site_id: website.site_id, key: key.into(), value: value.into(), typ };
		self.adapter.upsert_setting(&setting).await?;

		self.cache.invalidate(host);
		info!("setting {}:{} updated", host, key);
		Ok(setting)
	}

	pub async fn delete_setting(&self, host: &str, key: &str) -> SkResult<()> {
		let website = self.adapter.read_website(host).await?;
		self.adapter.delete_setting(website.site_id, key).await?;

		self.cache.invalidate(host);
		info!("setting {}:{} deleted", host, key);
		Ok(())
	}
}


// vim: ts=4
