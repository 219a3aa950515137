//! Database schema initialization.

use sqlx::SqlitePool;

/// Create all tables and indexes if they do not exist yet.
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Websites
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS websites (
		site_id integer PRIMARY KEY AUTOINCREMENT,
		host text NOT NULL UNIQUE,
		head_html text NOT NULL DEFAULT '',
		footer_html text NOT NULL DEFAULT '',
		logo text,
		icon text,
		style_sheet text,
		slogan text NOT NULL DEFAULT '',
		feed_title text NOT NULL DEFAULT '',
		feed_description text NOT NULL DEFAULT '',
		feed_icon_url text NOT NULL DEFAULT '',
		root_division text NOT NULL DEFAULT 'root',
		cache_period integer NOT NULL DEFAULT 300
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Settings
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
		site_id integer NOT NULL,
		key text NOT NULL,
		value text NOT NULL DEFAULT '',
		type char(1) NOT NULL DEFAULT 'U',
		PRIMARY KEY(site_id, key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Divisions
	//***********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS divisions (
		site_id integer NOT NULL,
		name text NOT NULL,
		active integer NOT NULL DEFAULT 1,
		classes text NOT NULL DEFAULT '',
		parent text,
		ord integer NOT NULL DEFAULT 0,
		level integer NOT NULL DEFAULT 0,
		level_order text NOT NULL DEFAULT '',
		pre_template_html text NOT NULL DEFAULT '',
		template_filename text NOT NULL DEFAULT '',
		post_template_html text NOT NULL DEFAULT '',
		suppress_div integer NOT NULL DEFAULT 0,
		use_span integer NOT NULL DEFAULT 0,
		included_pages text NOT NULL DEFAULT '',
		excluded_pages text NOT NULL DEFAULT '',
		cache_period integer NOT NULL DEFAULT 300,
		PRIMARY KEY(site_id, name)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_divisions_parent ON divisions(site_id, parent)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
