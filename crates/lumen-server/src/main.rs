// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Lumen image-search proxy binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lumen_server::{create_app_state, create_router};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod version;

/// Lumen server - HTTP proxy for Unsplash image search.
#[derive(Parser, Debug)]
#[command(name = "lumen-server", about = "Lumen image-search proxy", version)]
struct Args {
	/// Path to a TOML config file (defaults to /etc/lumen/server.toml)
	#[arg(long, env = "LUMEN_SERVER_CONFIG")]
	config: Option<PathBuf>,

	/// Subcommands for lumen-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Refuses to start without the Unsplash access key
	let config = match &args.config {
		Some(path) => lumen_server_config::load_config_with_file(path)?,
		None => lumen_server_config::load_config()?,
	};

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		environment = %config.environment,
		"starting lumen-server"
	);

	let state = create_app_state(&config)?;

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	let addr = config.socket_addr();
	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tracing::info!("listening on {}", addr);
	tracing::info!("Server running at http://localhost:{}", config.http.port);
	tracing::info!(environment = %config.environment, "Environment");

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
