use std::{env, path, sync::Arc};

use sitekit::error::SkResult;
use sitekit::AppBuilder;
use sitekit_site_adapter_sqlite::SiteAdapterSqlite;

#[tokio::main]
async fn main() -> SkResult<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();

	let db_dir = path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string()));
	std::fs::create_dir_all(&db_dir)?;
	let site_adapter = Arc::new(SiteAdapterSqlite::new(db_dir.join("site.db")).await?);

	let mut builder = AppBuilder::new();
	builder.site_adapter(site_adapter);
	if let Ok(listen) = env::var("LISTEN") {
		builder.listen(listen);
	}
	if env::var("LENIENT_BOOL").as_deref() == Ok("1") {
		builder.lenient_bool(true);
	}

	let app = builder.build()?;
	sitekit::serve(app).await
}

// vim: ts=4
