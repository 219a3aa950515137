//! Small TTL cache on top of an LRU map.
//!
//! Concurrent refills after a miss are tolerated: the last writer wins and
//! recomputation is idempotent, so there is no per-key mutual exclusion.
//! The lock is never held across an await point.

use lru::LruCache;
use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

struct Entry<V> {
	value: V,
	expires_at: Instant,
}

pub struct TtlCache<K: Hash + Eq, V: Clone> {
	entries: parking_lot::RwLock<LruCache<K, Entry<V>>>,
}

impl<K: Hash + Eq, V: Clone> TtlCache<K, V> {
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
		Self { entries: parking_lot::RwLock::new(LruCache::new(capacity)) }
	}

	/// Returns the cached value unless it is absent or its TTL has passed.
	/// Expired entries are dropped on access.
	pub fn get<Q>(&self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		let mut entries = self.entries.write();
		match entries.get(key) {
			Some(entry) if entry.expires_at > Instant::now() => {
				return Some(entry.value.clone());
			}
			Some(_) => {}
			None => return None,
		}
		entries.pop(key);
		None
	}

	pub fn put(&self, key: K, value: V, ttl: Duration) {
		let entry = Entry { value, expires_at: Instant::now() + ttl };
		self.entries.write().put(key, entry);
	}

	pub fn invalidate<Q>(&self, key: &Q)
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.entries.write().pop(key);
	}

	pub fn clear(&self) {
		self.entries.write().clear();
	}
}

impl<K: Hash + Eq, V: Clone> std::fmt::Debug for TtlCache<K, V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "TtlCache(len={})", self.entries.read().len())
	}
}


// vim: ts=4
