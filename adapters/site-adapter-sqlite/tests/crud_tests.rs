//! SQLite adapter CRUD tests
//!
//! Round-trips for the three logical tables: websites, settings, and
//! divisions.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use sitekit::prelude::*;
use sitekit::site_adapter::{Division, Setting, SiteAdapter, Website};
use sitekit_site_adapter_sqlite::SiteAdapterSqlite;
use tempfile::TempDir;

async fn create_test_adapter() -> (SiteAdapterSqlite, TempDir) {
	let tmp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = SiteAdapterSqlite::new(tmp_dir.path().join("site.db"))
		.await
		.expect("Failed to create adapter");
	(adapter, tmp_dir)
}

#[tokio::test]
async fn test_website_round_trip() {
	let (adapter, _tmp) = create_test_adapter().await;

	let mut website = Website::default_for_host("example.com");
	website.slogan = "News that matters".into();
	website.logo = Some("logo.png".into());
	website.cache_period = 600;

	let site_id = adapter.upsert_website(&website).await.expect("upsert");
	assert!(!site_id.is_transient(), "stored website must get a real id");

	let stored = adapter.read_website("example.com").await.expect("read");
	assert_eq!(stored.site_id, site_id);
	assert_eq!(stored.host.as_ref(), "example.com");
	assert_eq!(stored.slogan.as_ref(), "News that matters");
	assert_eq!(stored.logo.as_deref(), Some("logo.png"));
	assert_eq!(stored.style_sheet, None);
	assert_eq!(stored.root_division.as_ref(), "root");
	assert_eq!(stored.cache_period, 600);
}

#[tokio::test]
async fn test_website_upsert_keeps_id() {
	let (adapter, _tmp) = create_test_adapter().await;

	let website = Website::default_for_host("example.com");
	let site_id = adapter.upsert_website(&website).await.expect("upsert");

	let mut updated = adapter.read_website("example.com").await.expect("read");
	updated.slogan = "Updated".into();
	let second_id = adapter.upsert_website(&updated).await.expect("upsert");
	assert_eq!(second_id, site_id, "updating a website must not change its id");

	let stored = adapter.read_website("example.com").await.expect("read");
	assert_eq!(stored.slogan.as_ref(), "Updated");
}

#[tokio::test]
async fn test_missing_website_is_not_found() {
	let (adapter, _tmp) = create_test_adapter().await;

	let res = adapter.read_website("nosuch.example").await;
	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_setting_round_trip() {
	let (adapter, _tmp) = create_test_adapter().await;
	let site_id = adapter
		.upsert_website(&Website::default_for_host("example.com"))
		.await
		.expect("upsert website");

	let setting = Setting {
		site_id,
		key: "max_items".into(),
		value: "10".into(),
		typ: TypeTag::Integer,
	};
	adapter.upsert_setting(&setting).await.expect("upsert");

	let stored = adapter.read_setting(site_id, "max_items").await.expect("read");
	assert_eq!(stored.value.as_ref(), "10");
	assert_eq!(stored.typ, TypeTag::Integer);

	// Same key again replaces the row.
	let replaced = Setting { value: "20".into(), ..setting };
	adapter.upsert_setting(&replaced).await.expect("upsert");
	let stored = adapter.read_setting(site_id, "max_items").await.expect("read");
	assert_eq!(stored.value.as_ref(), "20");

	adapter.delete_setting(site_id, "max_items").await.expect("delete");
	let res = adapter.read_setting(site_id, "max_items").await;
	assert!(matches!(res, Err(Error::NotFound)));

	let res = adapter.delete_setting(site_id, "max_items").await;
	assert!(matches!(res, Err(Error::NotFound)), "second delete must report NotFound");
}

#[tokio::test]
async fn test_division_round_trip() {
	let (adapter, _tmp) = create_test_adapter().await;
	let site_id = adapter
		.upsert_website(&Website::default_for_host("example.com"))
		.await
		.expect("upsert website");

	let mut division = Division::new(site_id, "sidebar");
	division.parent = Some("root".into());
	division.classes = "box wide".into();
	division.order = 3;
	division.level = 1;
	division.level_order = "0001.0003".into();
	division.included_pages = "^/blog/".into();
	division.use_span = true;
	adapter.upsert_division(&division).await.expect("upsert");

	let stored = adapter.read_division(site_id, "sidebar").await.expect("read");
	assert_eq!(stored.parent.as_deref(), Some("root"));
	assert_eq!(stored.classes.as_ref(), "box wide");
	assert_eq!(stored.order, 3);
	assert_eq!(stored.level, 1);
	assert_eq!(stored.level_order.as_ref(), "0001.0003");
	assert_eq!(stored.included_pages.as_ref(), "^/blog/");
	assert!(stored.use_span);
	assert!(!stored.suppress_div);

	adapter.delete_division(site_id, "sidebar").await.expect("delete");
	let res = adapter.read_division(site_id, "sidebar").await;
	assert!(matches!(res, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_in_memory_database() {
	let adapter = SiteAdapterSqlite::open_in_memory().await.expect("open");

	let site_id = adapter
		.upsert_website(&Website::default_for_host("mem.example"))
		.await
		.expect("upsert");
	let stored = adapter.read_website("mem.example").await.expect("read");
	assert_eq!(stored.site_id, site_id);
}

// vim: ts=4
