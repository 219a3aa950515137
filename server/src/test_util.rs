//! In-memory [`SiteAdapter`] for unit tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::prelude::*;
use crate::site_adapter::{Division, Setting, SiteAdapter, Website};

#[derive(Debug, Default)]
struct Store {
	websites: HashMap<Box<str>, Website>,
	settings: HashMap<(u32, Box<str>), Setting>,
	divisions: HashMap<(u32, Box<str>), Division>,
	next_site_id: u32,
}

/// Hash-map backed adapter with a read counter, so tests can assert on
/// cache hits without a database.
#[derive(Debug)]
pub(crate) struct MemoryAdapter {
	store: RwLock<Store>,
	reads: AtomicUsize,
}

impl MemoryAdapter {
	pub fn new() -> Self {
		MemoryAdapter {
			store: RwLock::new(Store { next_site_id: 1, ..Store::default() }),
			reads: AtomicUsize::new(0),
		}
	}

	/// Number of storage reads performed so far.
	pub fn reads(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}

	fn count_read(&self) {
		self.reads.fetch_add(1, Ordering::SeqCst);
	}

	pub fn add_website(&self, host: &str, cache_period: u32) -> SiteId {
		let mut store = self.store.write();
		let site_id = SiteId(store.next_site_id);
		store.next_site_id += 1;
		let mut website = Website::default_for_host(host);
		website.site_id = site_id;
		website.cache_period = cache_period;
		store.websites.insert(host.into(), website);
		site_id
	}

	pub fn add_setting(&self, site_id: SiteId, key: &str, value: &str, typ: TypeTag) {
		let setting = Setting { site_id, key: key.into(), value: value.into(), typ };
		self.store.write().settings.insert((site_id.0, key.into()), setting);
	}

	#[allow(dead_code)]
	pub fn add_division(&self, site_id: SiteId, name: &str, parent: Option<&str>, active: bool) {
		let mut division = Division::new(site_id, name);
		division.parent = parent.map(Into::into);
		division.active = active;
		self.store.write().divisions.insert((site_id.0, name.into()), division);
	}
}

fn sorted(mut divisions: Vec<Division>) -> Vec<Division> {
	divisions.sort_by(|a, b| {
		a.level_order.cmp(&b.level_order).then_with(|| a.name.cmp(&b.name))
	});
	divisions
}

#[async_trait]
impl SiteAdapter for MemoryAdapter {
	async fn read_website(&self, host: &str) -> SkResult<Website> {
		self.count_read();
		self.store.read().websites.get(host).cloned().ok_or(Error::NotFound)
	}

	async fn upsert_website(&self, website: &Website) -> SkResult<SiteId> {
		let mut store = self.store.write();
		let site_id = match store.websites.get(&website.host) {
			Some(existing) => existing.site_id,
			None if website.site_id.is_transient() => {
				let site_id = SiteId(store.next_site_id);
				store.next_site_id += 1;
				site_id
			}
			None => website.site_id,
		};
		let mut website = website.clone();
		website.site_id = site_id;
		store.websites.insert(website.host.clone(), website);
		Ok(site_id)
	}

	async fn list_settings(&self, site_id: SiteId) -> SkResult<Vec<Setting>> {
		self.count_read();
		let store = self.store.read();
		let mut settings: Vec<Setting> = store
			.settings
			.values()
			.filter(|s| s.site_id == site_id)
			.cloned()
			.collect();
		settings.sort_by(|a, b| a.key.cmp(&b.key));
		Ok(settings)
	}

	async fn read_setting(&self, site_id: SiteId, key: &str) -> SkResult<Setting> {
		self.count_read();
		self.store
			.read()
			.settings
			.get(&(site_id.0, key.into()))
			.cloned()
			.ok_or(Error::NotFound)
	}

	async fn upsert_setting(&self, setting: &Setting) -> SkResult<()> {
		self.store
			.write()
			.settings
			.insert((setting.site_id.0, setting.key.clone()), setting.clone());
		Ok(())
	}

	async fn delete_setting(&self, site_id: SiteId, key: &str) -> SkResult<()> {
		match self.store.write().settings.remove(&(site_id.0, key.into())) {
			Some(_) => Ok(()),
			None => Err(Error::NotFound),
		}
	}

	async fn read_division(&self, site_id: SiteId, name: &str) -> SkResult<Division> {
		self.count_read();
		self.store
			.read()
			.divisions
			.get(&(site_id.0, name.into()))
			.cloned()
			.ok_or(Error::NotFound)
	}

	async fn list_divisions(&self, site_id: SiteId) -> SkResult<Vec<Division>> {
		self.count_read();
		let store = self.store.read();
		let divisions: Vec<Division> = store
			.divisions
			.values()
			.filter(|d| d.site_id == site_id)
			.cloned()
			.collect();
		Ok(sorted(divisions))
	}

	async fn list_children(&self, site_id: SiteId, parent: &str) -> SkResult<Vec<Division>> {
		self.count_read();
		let store = self.store.read();
		let divisions: Vec<Division> = store
			.divisions
			.values()
			.filter(|d| d.site_id == site_id && d.active && d.parent.as_deref() == Some(parent))
			.cloned()
			.collect();
		Ok(sorted(divisions))
	}

	async fn upsert_division(&self, division: &Division) -> SkResult<()> {
		self.store
			.write()
			.divisions
			.insert((division.site_id.0, division.name.clone()), division.clone());
		Ok(())
	}

	async fn delete_division(&self, site_id: SiteId, name: &str) -> SkResult<()> {
		match self.store.write().divisions.remove(&(site_id.0, name.into())) {
			Some(_) => Ok(()),
			None => Err(Error::NotFound),
		}
	}
}

// vim: ts=4
