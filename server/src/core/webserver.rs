//! Plain HTTP listener. TLS termination is expected to happen in front of
//! this process.

use tokio::net::TcpListener;

use crate::prelude::*;
use crate::routes;

pub async fn serve(app: App) -> SkResult<()> {
	let listener = TcpListener::bind(app.listen()).await?;
	info!("listening on {}", app.listen());

	let router = routes::init(app);
	axum::serve(listener, router).await?;

	Ok(())
}

// vim: ts=4
