//! Division table operations.
//!
//! Children are looked up by parent *name*. The caller (the server's
//! division save path) computes `level` and `level_order`; this module
//! stores them as given.

use sqlx::{Row, SqlitePool};

use crate::utils::*;
use sitekit::prelude::*;
use sitekit::site_adapter::Division;

const COLUMNS: &str = "site_id, name, active, classes, parent, ord, level, level_order,
	pre_template_html, template_filename, post_template_html,
	suppress_div, use_span, included_pages, excluded_pages, cache_period";

fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Division, sqlx::Error> {
	Ok(Division {
		site_id: SiteId(row.try_get("site_id")?),
		name: row.try_get("name")?,
		active: row.try_get("active")?,
		classes: row.try_get("classes")?,
		parent: row.try_get("parent")?,
		order: row.try_get("ord")?,
		level: row.try_get("level")?,
		level_order: row.try_get("level_order")?,
		pre_template_html: row.try_get("pre_template_html")?,
		template_filename: row.try_get("template_filename")?,
		post_template_html: row.try_get("post_template_html")?,
		suppress_div: row.try_get("suppress_div")?,
		use_span: row.try_get("use_span")?,
		included_pages: row.try_get("included_pages")?,
		excluded_pages: row.try_get("excluded_pages")?,
		cache_period: row.try_get("cache_period")?,
	})
}

pub(crate) async fn read(db: &SqlitePool, site_id: SiteId, name: &str) -> SkResult<Division> {
	let res = sqlx::query(&format!(
		"SELECT {COLUMNS} FROM divisions WHERE site_id = ? AND name = ?"
	))
	.bind(site_id.0)
	.bind(name)
	.fetch_one(db)
	.await;

	map_res(res, |row| from_row(&row))
}

pub(crate) async fn list(db: &SqlitePool, site_id: SiteId) -> SkResult<Vec<Division>> {
	let res = sqlx::query(&format!(
		"SELECT {COLUMNS} FROM divisions WHERE site_id = ? ORDER BY level_order, name"
	))
	.bind(site_id.0)
	.fetch_all(db)
	.await;

	map_rows(res, |row| from_row(&row))
}

pub(crate) async fn list_children(
	db: &SqlitePool,
	site_id: SiteId,
	parent: &str,
) -> SkResult<Vec<Division>> {
	let res = sqlx::query(&format!(
		"SELECT {COLUMNS} FROM divisions
		WHERE site_id = ? AND parent = ? AND active = 1
		ORDER BY level_order, name"
	))
	.bind(site_id.0)
	.bind(parent)
	.fetch_all(db)
	.await;

	map_rows(res, |row| from_row(&row))
}

pub(crate) async fn upsert(db: &SqlitePool, division: &Division) -> SkResult<()> {
	sqlx::query(&format!(
		"INSERT OR REPLACE INTO divisions ({COLUMNS})
		VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
	))
	.bind(division.site_id.0)
	.bind(&*division.name)
	.bind(division.active)
	.bind(&*division.classes)
	.bind(division.parent.as_deref())
	.bind(division.order)
	.bind(division.level)
	.bind(&*division.level_order)
	.bind(&*division.pre_template_html)
	.bind(&*division.template_filename)
	.bind(&*division.post_template_html)
	.bind(division.suppress_div)
	.bind(division.use_span)
	.bind(&*division.included_pages)
	.bind(&*division.excluded_pages)
	.bind(division.cache_period)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, site_id: SiteId, name: &str) -> SkResult<()> {
	let res = sqlx::query("DELETE FROM divisions WHERE site_id = ? AND name = ?")
		.bind(site_id.0)
		.bind(name)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

// vim: ts=4
