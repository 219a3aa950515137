//! Setting table operations.

use sqlx::{Row, SqlitePool};

use crate::utils::*;
use sitekit::prelude::*;
use sitekit::site_adapter::Setting;

fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Setting, sqlx::Error> {
	let code: &str = row.try_get("type")?;
	let typ = code
		.chars()
		.next()
		.and_then(TypeTag::from_code)
		.ok_or_else(|| sqlx::Error::Decode(format!("unknown type tag: {:?}", code).into()))?;
	Ok(Setting {
		site_id: SiteId(row.try_get("site_id")?),
		key: row.try_get("key")?,
		value: row.try_get("value")?,
		typ,
	})
}

pub(crate) async fn list(db: &SqlitePool, site_id: SiteId) -> SkResult<Vec<Setting>> {
	let res = sqlx::query(
		"SELECT site_id, key, value, type FROM settings WHERE site_id = ? ORDER BY key",
	)
	.bind(site_id.0)
	.fetch_all(db)
	.await;

	map_rows(res, |row| from_row(&row))
}

pub(crate) async fn read(db: &SqlitePool, site_id: SiteId, key: &str) -> SkResult<Setting> {
	let res =
		sqlx::query("SELECT site_id, key, value, type FROM settings WHERE site_id = ? AND key = ?")
			.bind(site_id.0)
			.bind(key)
			.fetch_one(db)
			.await;

	map_res(res, |row| from_row(&row))
}

pub(crate) async fn upsert(db: &SqlitePool, setting: &Setting) -> SkResult<()> {
	sqlx::query("INSERT OR REPLACE INTO settings (site_id, key, value, type) VALUES (?, ?, ?, ?)")
		.bind(setting.site_id.0)
		.bind(&*setting.key)
		.bind(&*setting.value)
		.bind(setting.typ.code().to_string())
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, site_id: SiteId, key: &str) -> SkResult<()> {
	let res = sqlx::query("DELETE FROM settings WHERE site_id = ? AND key = ?")
		.bind(site_id.0)
		.bind(key)
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
