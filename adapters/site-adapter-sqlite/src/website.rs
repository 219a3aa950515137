//! Website table operations.

use sqlx::{Row, SqlitePool};

use crate::utils::*;
use sitekit::prelude::*;
use sitekit::site_adapter::Website;

fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Website, sqlx::Error> {
	Ok(Website {
		site_id: SiteId(row.try_get("site_id")?),
		host: row.try_get("host")?,
		head_html: row.try_get("head_html")?,
		footer_html: row.try_get("footer_html")?,
		logo: row.try_get("logo")?,
		icon: row.try_get("icon")?,
		style_sheet: row.try_get("style_sheet")?,
		slogan: row.try_get("slogan")?,
		feed_title: row.try_get("feed_title")?,
		feed_description: row.try_get("feed_description")?,
		feed_icon_url: row.try_get("feed_icon_url")?,
		root_division: row.try_get("root_division")?,
		cache_period: row.try_get("cache_period")?,
	})
}

pub(crate) async fn read(db: &SqlitePool, host: &str) -> SkResult<Website> {
	let res = sqlx::query(
		"SELECT site_id, host, head_html, footer_html, logo, icon, style_sheet, slogan,
			feed_title, feed_description, feed_icon_url, root_division, cache_period
		FROM websites WHERE host = ?",
	)
	.bind(host)
	.fetch_one(db)
	.await;

	map_res(res, |row| from_row(&row))
}

/// Insert or update by host. The incoming `site_id` is ignored; the stored
/// id (a fresh one on first insert) is returned.
pub(crate) async fn upsert(db: &SqlitePool, website: &Website) -> SkResult<SiteId> {
	sqlx::query(
		"INSERT INTO websites (host, head_html, footer_html, logo, icon, style_sheet, slogan,
			feed_title, feed_description, feed_icon_url, root_division, cache_period)
		VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
		ON CONFLICT(host) DO UPDATE SET
			head_html=excluded.head_html, footer_html=excluded.footer_html,
			logo=excluded.logo, icon=excluded.icon, style_sheet=excluded.style_sheet,
			slogan=excluded.slogan, feed_title=excluded.feed_title,
			feed_description=excluded.feed_description, feed_icon_url=excluded.feed_icon_url,
			root_division=excluded.root_division, cache_period=excluded.cache_period",
	)
	.bind(&*website.host)
	.bind(&*website.head_html)
	.bind(&*website.footer_html)
	.bind(website.logo.as_deref())
	.bind(website.icon.as_deref())
	.bind(website.style_sheet.as_deref())
	.bind(&*website.slogan)
	.bind(&*website.feed_title)
	.bind(&*website.feed_description)
	.bind(&*website.feed_icon_url)
	.bind(&*website.root_division)
	.bind(website.cache_period)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	let site_id: u32 = sqlx::query_scalar("SELECT site_id FROM websites WHERE host = ?")
		.bind(&*website.host)
		.fetch_one(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(SiteId(site_id))
}

// vim: ts=4
