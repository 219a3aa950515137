//! SQLite implementation of the sitekit [`SiteAdapter`] trait.
//!
//! One database file holds the three logical tables (websites, settings,
//! divisions). The schema is initialized on open; see [`schema`].

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use sitekit::prelude::*;
use sitekit::site_adapter::{Division, Setting, SiteAdapter, Website};

mod division;
mod schema;
mod setting;
mod utils;
mod website;

#[derive(Debug)]
pub struct SiteAdapterSqlite {
	db: SqlitePool,
}

impl SiteAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> SkResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}

	/// In-memory database, mainly for tests and demos. The pool is capped
	/// at one connection so every caller sees the same database.
	pub async fn open_in_memory() -> SkResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new().in_memory(true);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(1)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl SiteAdapter for SiteAdapterSqlite {
	// Websites
	//**********
	async fn read_website(&self, host: &str) -> SkResult<Website> {
		website::read(&self.db, host).await
	}

	async fn upsert_website(&self, website: &Website) -> SkResult<SiteId> {
		website::upsert(&self.db, website).await
	}

	// Settings
	//**********
	async fn list_settings(&self, site_id: SiteId) -> SkResult<Vec<Setting>> {
		setting::list(&self.db, site_id).await
	}

	async fn read_setting(&self, site_id: SiteId, key: &str) -> SkResult<Setting> {
		setting::read(&self.db, site_id, key).await
	}

	async fn upsert_setting(&self, setting: &Setting) -> SkResult<()> {
		setting::upsert(&self.db, setting).await
	}

	async fn delete_setting(&self, site_id: SiteId, key: &str) -> SkResult<()> {
		setting::delete(&self.db, site_id, key).await
	}

	// Divisions
	//***********
	async fn read_division(&self, site_id: SiteId, name: &str) -> SkResult<Division> {
		division::read(&self.db, site_id, name).await
	}

	async fn list_divisions(&self, site_id: SiteId) -> SkResult<Vec<Division>> {
		division::list(&self.db, site_id).await
	}

	async fn list_children(&self, site_id: SiteId, parent: &str) -> SkResult<Vec<Division>> {
		division::list_children(&self.db, site_id, parent).await
	}

	async fn upsert_division(&self, division: &Division) -> SkResult<()> {
		division::upsert(&self.db, division).await
	}

	async fn delete_division(&self, site_id: SiteId, name: &str) -> SkResult<()> {
		division::delete(&self.db, site_id, name).await
	}
}

// vim: ts=4
