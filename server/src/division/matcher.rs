//! Compiled page include/exclude pattern lists.
//!
//! A division's `included_pages`/`excluded_pages` fields hold
//! whitespace-separated regular expressions. Each pattern is matched
//! against the *start* of the request path (a prefix match, not a
//! full-string match). Lists are compiled once per distinct field text and
//! cached, not recompiled per request.

use lru::LruCache;
use regex::Regex;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::prelude::*;

// PatternList //
//*************//

/// A parsed pattern-list field.
#[derive(Debug)]
pub struct PatternList {
	patterns: Vec<Regex>,
}

impl PatternList {
	/// Split on whitespace and compile each pattern anchored at the start
	/// of the subject. A malformed pattern is a validation problem for the
	/// caller, not something to skip silently.
	pub fn parse(text: &str) -> SkResult<Self> {
		let mut patterns = Vec::new();
		for pattern in text.split_whitespace() {
			let re = Regex::new(&format!("^(?:{pattern})"))
				.map_err(|err| Error::BadPattern(err.to_string()))?;
			patterns.push(re);
		}
		Ok(PatternList { patterns })
	}

	/// True when any pattern matches the start of `path`. An empty list
	/// matches nothing.
	pub fn matches(&self, path: &str) -> bool {
		self.patterns.iter().any(|re| re.is_match(path))
	}
}

// PatternCache //
//**************//

/// LRU of compiled pattern lists, keyed by the raw field text.
pub struct PatternCache {
	compiled: parking_lot::RwLock<LruCache<Box<str>, Arc<PatternList>>>,
}

impl PatternCache {
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
		PatternCache { compiled: parking_lot::RwLock::new(LruCache::new(capacity)) }
	}

	pub fn compiled(&self, text: &str) -> SkResult<Arc<PatternList>> {
		if let Some(list) = self.compiled.write().get(text) {
			return Ok(list.clone());
		}
		let list = Arc::new(PatternList::parse(text)?);
		self.compiled.write().put(text.into(), list.clone());
		Ok(list)
	}
}

impl std::fmt::Debug for PatternCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "PatternCache(len={})", self.compiled.read().len())
	}
}


// vim: ts=4
