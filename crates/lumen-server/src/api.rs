// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Router construction and shared application state.

use std::{
	any::Any,
	path::{Path, PathBuf},
	sync::Arc,
};

use axum::{
	extract::State,
	response::Response,
	routing::{any, get},
	Router,
};
use lumen_common_i18n::{resolve_locale, t, DEFAULT_LOCALE};
use lumen_server_config::{PathsConfig, ServerConfig};
use lumen_server_search_unsplash::{UnsplashClient, UnsplashError};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir};

use crate::{api_response, routes};

/// Landing page and assets shipped with this crate.
pub const BUNDLED_WEB_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub config: Arc<ServerConfig>,
	pub unsplash_client: Option<Arc<UnsplashClient>>,
	/// Locale of every user-facing message.
	pub locale: &'static str,
}

/// Build the application state from resolved configuration.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, UnsplashError> {
	let locale = resolve_locale(Some(&config.logging.locale), DEFAULT_LOCALE);

	let unsplash_client = match &config.unsplash.access_key {
		Some(access_key) => {
			tracing::info!(base_url = %config.unsplash.base_url, "Unsplash configured, creating client");
			let client = UnsplashClient::new(access_key.clone())?
				.with_base_url(&config.unsplash.base_url)
				.with_anonymous_name(t(locale, "server.search.anonymous_user"));
			Some(Arc::new(client))
		}
		None => {
			tracing::warn!("Unsplash not configured");
			None
		}
	};

	Ok(AppState {
		config: Arc::new(config.clone()),
		unsplash_client,
		locale,
	})
}

/// Directory served as static files: the configured one, else the bundled assets.
pub fn resolve_web_dir(paths: &PathsConfig) -> PathBuf {
	match &paths.web_dir {
		Some(dir) => PathBuf::from(dir),
		None => Path::new(BUNDLED_WEB_DIR).to_path_buf(),
	}
}

async fn route_not_found(State(state): State<AppState>) -> Response {
	api_response::route_not_found(state.locale)
}

/// API routes without fallbacks or middleware.
pub fn api_routes() -> Router<AppState> {
	Router::new()
		.route("/check-env", get(routes::check_env::check_env))
		.route("/search/images", get(routes::search::search_images))
}

/// Wrap routes with static files, the JSON 404 and the panic-to-500 layer.
pub fn with_fallbacks(routes: Router<AppState>, state: AppState) -> Router {
	let locale = state.locale;
	let web_dir = resolve_web_dir(&state.config.paths);

	tracing::debug!(web_dir = %web_dir.display(), "serving static web assets");

	let not_found = any(route_not_found).with_state(state.clone());
	let static_files = ServeDir::new(&web_dir)
		.call_fallback_on_method_not_allowed(true)
		.fallback(not_found);

	routes
		.method_not_allowed_fallback(route_not_found)
		.fallback_service(static_files)
		.layer(CatchPanicLayer::custom(
			move |panic: Box<dyn Any + Send + 'static>| api_response::panic_response(locale, panic),
		))
		.with_state(state)
}

/// Create the router with API routes, static files and the 404/500 handlers.
///
/// CORS and request tracing are layered on by the binary.
pub fn create_router(state: AppState) -> Router {
	with_fallbacks(api_routes(), state)
}
