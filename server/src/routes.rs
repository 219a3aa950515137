use axum::{Router, routing::{delete, get, put}};
use tower_http::trace::TraceLayer;

use crate::core::app::App;
use crate::{division, settings, site};

pub fn init(app: App) -> Router {
	Router::new()
		.route("/api/site", get(site::handler::get_site_context))
		.route("/api/settings", get(settings::handler::list_settings))
		.route("/api/settings/{key}", get(settings::handler::get_setting))
		.route("/api/settings/{key}", put(settings::handler::put_setting))
		.route("/api/settings/{key}", delete(settings::handler::delete_setting))
		.route("/api/divisions", get(division::handler::list_divisions))
		.route("/api/divisions/{name}", get(division::handler::get_division))
		.route("/api/divisions/{name}", put(division::handler::put_division))
		.route("/api/divisions/{name}", delete(division::handler::delete_division))
		.route("/api/divisions/{name}/render", get(division::handler::get_render_context))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
