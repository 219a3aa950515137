//! Division tree operations.
//!
//! `level` and `level_order` are derived from the current parent chain and
//! recomputed on every save, no matter which fields changed. Traversal is
//! cycle-guarded: a visited-name set plus a hop bound turn bad parent data
//! into sentinel values instead of a hung or crashed render pass.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::division::matcher::PatternCache;
use crate::prelude::*;
use crate::site_adapter::{Division, SiteAdapter};

/// Maximum number of parent hops a traversal will follow.
pub const MAX_TREE_DEPTH: usize = 10;

/// `level` value reported when the parent chain overflows or cycles.
pub const LEVEL_SENTINEL: i64 = -1;

/// `path` value reported when the parent chain overflows or cycles.
pub const PATH_SENTINEL: &str = "too many recursion levels: check for circular reference";

/// Context bindings handed to the downstream template for one division.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
	pub render_division: bool,
	pub division: Division,
}

pub struct DivisionService {
	adapter: Arc<dyn SiteAdapter>,
	patterns: PatternCache,
}

impl DivisionService {
	pub fn new(adapter: Arc<dyn SiteAdapter>, pattern_cache_capacity: usize) -> Self {
		DivisionService { adapter, patterns: PatternCache::new(pattern_cache_capacity) }
	}

	pub async fn read(&self, site_id: SiteId, name: &str) -> SkResult<Division> {
		self.adapter.read_division(site_id, name).await
	}

	/// All divisions of a website in global display order (`level_order`):
	/// all roots first, then all depth-1 divisions, and so on; within a
	/// depth, by sibling order. Not a depth-first traversal.
	pub async fn list(&self, site_id: SiteId) -> SkResult<Vec<Division>> {
		self.adapter.list_divisions(site_id).await
	}

	/// Active divisions whose parent *name* matches this division's name.
	pub async fn children(&self, division: &Division) -> SkResult<Vec<Division>> {
		self.adapter.list_children(division.site_id, &division.name).await
	}

	/// Ancestor names of a division, root-first, excluding the division
	/// itself. `None` when the chain overflows [`MAX_TREE_DEPTH`] or
	/// revisits a name (a cycle).
	async fn ancestor_names(&self, division: &Division) -> SkResult<Option<Vec<Box<str>>>> {
		let mut names: Vec<Box<str>> = Vec::new();
		let mut visited: HashSet<Box<str>> = HashSet::new();
		visited.insert(division.name.clone());

		let mut parent = division.parent.clone();
		while let Some(parent_name) = parent {
			if names.len() >= MAX_TREE_DEPTH || !visited.insert(parent_name.clone()) {
				return Ok(None);
			}
			parent = match self.adapter.read_division(division.site_id, &parent_name).await {
				Ok(parent_division) => parent_division.parent,
				Err(Error::NotFound) => {
					// Dangling parent name: treat it as the end of the chain.
					warn!(
						"division {}:{} names missing parent {}",
						division.site_id, division.name, parent_name
					);
					None
				}
				Err(err) => return Err(err),
			};
			names.push(parent_name);
		}

		names.reverse();
		Ok(Some(names))
	}

	/// Depth of a division: parent hops to a parentless ancestor, 0 for a
	/// root, [`LEVEL_SENTINEL`] on overflow or cycle.
	pub async fn level(&self, division: &Division) -> SkResult<i64> {
		match self.ancestor_names(division).await? {
			Some(names) => Ok(names.len() as i64),
			None => Ok(LEVEL_SENTINEL),
		}
	}

	/// Ancestor-chain display string, names joined with `.`, root-first.
	/// [`PATH_SENTINEL`] on overflow or cycle — a data-integrity signal,
	/// not an error.
	pub async fn path(&self, division: &Division) -> SkResult<String> {
		match self.ancestor_names(division).await? {
			Some(mut names) => {
				names.push(division.name.clone());
				Ok(names.join("."))
			}
			None => Ok(PATH_SENTINEL.to_string()),
		}
	}

	/// Recompute the derived fields and persist. Every create/update goes
	/// through here, including saves that touch no tree-related field.
	pub async fn save(&self, mut division: Division) -> SkResult<Division> {
		division.level = self.level(&division).await?;
		division.level_order = format!("{:04}.{:04}", division.level, division.order).into();
		self.adapter.upsert_division(&division).await?;
		Ok(division)
	}

	pub async fn delete(&self, site_id: SiteId, name: &str) -> SkResult<()> {
		self.adapter.delete_division(site_id, name).await
	}

	/// Whether a division renders on `request_path`.
	///
	/// A non-empty include list requires at least one pattern to match the
	/// start of the path; a non-empty exclude list vetoes on any match.
	/// Exclusion always wins over inclusion.
	pub fn should_render(&self, division: &Division, request_path: &str) -> SkResult<bool> {
		let mut render = true;

		if !division.included_pages.is_empty() {
			let included = self.patterns.compiled(&division.included_pages)?;
			if !included.matches(request_path) {
				render = false;
			}
		}

		if !division.excluded_pages.is_empty() {
			let excluded = self.patterns.compiled(&division.excluded_pages)?;
			if excluded.matches(request_path) {
				render = false;
			}
		}

		Ok(render)
	}

	/// The template handoff for one division and request path.
	pub fn render_context(&self, division: Division, request_path: &str) -> SkResult<RenderContext> {
		let render_division = self.should_render(&division, request_path)?;
		Ok(RenderContext { render_division, division })
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used, clippy::expect_used)]
	use super::*;
	use crate::test_util::MemoryAdapter;

	fn service(adapter: Arc<MemoryAdapter>) -> DivisionService {
		DivisionService::new(adapter, 16)
	}

	fn division(site_id: SiteId, name: &str, parent: Option<&str>, order: i64) -> Division {
		let mut division = Division::new(site_id, name);
		division.parent = parent.map(Into::into);
		division.order = order;
		division
	}

	#[tokio::test]
	async fn test_root_level_and_path() {
		let adapter = Arc::new(MemoryAdapter::new());
		let site_id = adapter.add_website("example.com", 300);
		let service = service(adapter);

		let root = service.save(division(site_id, "root", None, 0)).await.expect("save");
		assert_eq!(root.level, 0);
		assert_eq!(root.level_order.as_ref(), "0000.0000");
		assert_eq!(service.path(&root).await.expect("path"), "root");
	}

	#[tokio::test]
	async fn test_three_level_chain() {
		let adapter = Arc::new(MemoryAdapter::new());
		let site_id = adapter.add_website("example.com", 300);
		let service = service(adapter);

		service.save(division(site_id, "root", None, 0)).await.expect("save");
		service.save(division(site_id, "mid", Some("root"), 0)).await.expect("save");
		let leaf = service.save(division(site_id, "leaf", Some("mid"), 2)).await.expect("save");

		assert_eq!(leaf.level, 2);
		assert_eq!(leaf.level_order.as_ref(), "0002.0002");
		assert_eq!(service.path(&leaf).await.expect("path"), "root.mid.leaf");
	}

	#[tokio::test]
	async fn test_cycle_returns_sentinels() {
		let adapter = Arc::new(MemoryAdapter::new());
		let site_id = adapter.add_website("example.com", 300);
		let service = service(adapter.clone());

		service.save(division(site_id, "a", Some("b"), 0)).await.expect("save");
		let b = service.save(division(site_id, "b", Some("a"), 0)).await.expect("save");

		let a = adapter.read_division(site_id, "a").await.expect("read");
		assert_eq!(service.level(&a).await.expect("level"), LEVEL_SENTINEL);
		assert_eq!(service.level(&b).await.expect("level"), LEVEL_SENTINEL);
		assert_eq!(service.path(&a).await.expect("path"), PATH_SENTINEL);
	}

	#[tokio::test]
	async fn test_deep_chain_overflows() {
		let adapter = Arc::new(MemoryAdapter::new());
		let site_id = adapter.add_website("example.com", 300);
		let service = service(adapter);

		service.save(division(site_id, "d0", None, 0)).await.expect("save");
		for i in 1..=12 {
			let name = format!("d{i}");
			let parent = format!("d{}", i - 1);
			service
				.save(division(site_id, &name, Some(&parent), 0))
				.await
				.expect("save");
		}

		let shallow = service.read(site_id, "d10").await.expect("read");
		assert_eq!(service.level(&shallow).await.expect("level"), 10);
		let deep = service.read(site_id, "d12").await.expect("read");
		assert_eq!(service.level(&deep).await.expect("level"), LEVEL_SENTINEL);
		assert_eq!(service.path(&deep).await.expect("path"), PATH_SENTINEL);
	}

	#[tokio::test]
	async fn test_level_order_sorts_depth_before_order() {
		let adapter = Arc::new(MemoryAdapter::new());
		let site_id = adapter.add_website("example.com", 300);
		let service = service(adapter);

		service.save(division(site_id, "root", None, 5)).await.expect("save");
		service.save(division(site_id, "child", Some("root"), 0)).await.expect("save");
		service.save(division(site_id, "sibling", Some("root"), 3)).await.expect("save");

		let all = service.list(site_id).await.expect("list");
		let names: Vec<&str> = all.iter().map(|d| d.name.as_ref()).collect();
		// Depth-0 first despite its higher order; within a depth, by order.
		assert_eq!(names, vec!["root", "child", "sibling"]);
	}

	#[tokio::test]
	async fn test_save_recomputes_on_reparent() {
		let adapter = Arc::new(MemoryAdapter::new());
		let site_id = adapter.add_website("example.com", 300);
		let service = service(adapter);

		service.save(division(site_id, "root", None, 0)).await.expect("save");
		service.save(division(site_id, "other", Some("root"), 0)).await.expect("save");
		let moved = service.save(division(site_id, "x", Some("root"), 1)).await.expect("save");
		assert_eq!(moved.level, 1);

		let mut reparented = moved;
		reparented.parent = Some("other".into());
		let reparented = service.save(reparented).await.expect("save");
		assert_eq!(reparented.level, 2);
		assert_eq!(reparented.level_order.as_ref(), "0002.0001");
	}

	#[tokio::test]
	async fn test_children_by_parent_name() {
		let adapter = Arc::new(MemoryAdapter::new());
		let site_id = adapter.add_website("example.com", 300);
		let service = service(adapter);

		let root = service.save(division(site_id, "root", None, 0)).await.expect("save");
		service.save(division(site_id, "b", Some("root"), 1)).await.expect("save");
		service.save(division(site_id, "a", Some("root"), 0)).await.expect("save");
		let mut inactive = division(site_id, "hidden", Some("root"), 2);
		inactive.active = false;
		service.save(inactive).await.expect("save");

		let children = service.children(&root).await.expect("children");
		let names: Vec<&str> = children.iter().map(|d| d.name.as_ref()).collect();
		assert_eq!(names, vec!["a", "b"]);
	}

	#[tokio::test]
	async fn test_should_render() {
		let adapter = Arc::new(MemoryAdapter::new());
		let site_id = adapter.add_website("example.com", 300);
		let service = service(adapter);

		let mut division = Division::new(site_id, "blogbox");
		division.included_pages = "^/blog/".into();
		assert!(service.should_render(&division, "/blog/post1").expect("render"));
		assert!(!service.should_render(&division, "/shop/").expect("render"));

		// Exclusion wins over a matching inclusion.
		division.excluded_pages = "^/blog/".into();
		assert!(!service.should_render(&division, "/blog/post1").expect("render"));

		// No lists at all: always render.
		let plain = Division::new(site_id, "everywhere");
		assert!(service.should_render(&plain, "/anything").expect("render"));
	}

	#[tokio::test]
	async fn test_render_context_handoff() {
		let adapter = Arc::new(MemoryAdapter::new());
		let site_id = adapter.add_website("example.com", 300);
		let service = service(adapter);

		let mut division = Division::new(site_id, "box");
		division.excluded_pages = "^/private/".into();
		let ctx = service.render_context(division, "/private/x").expect("context");
		assert!(!ctx.render_division);
		assert_eq!(ctx.division.name.as_ref(), "box");
	}

	#[tokio::test]
	async fn test_malformed_pattern_surfaces() {
		let adapter = Arc::new(MemoryAdapter::new());
		let site_id = adapter.add_website("example.com", 300);
		let service = service(adapter);

		let mut division = Division::new(site_id, "bad");
		division.included_pages = "(".into();
		assert!(matches!(
			service.should_render(&division, "/x"),
			Err(Error::BadPattern(_))
		));
	}
}

// vim: ts=4
