// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the Lumen image-search proxy.
//!
//! - Layered configuration from defaults, a TOML file and the environment
//! - Type-safe configuration with validation
//! - Startup preconditions: the Unsplash access key must be present
//!
//! ```ignore
//! use lumen_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

const DEFAULT_ENVIRONMENT: &str = "development";

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub environment: String,
	pub http: HttpConfig,
	pub unsplash: UnsplashConfig,
	pub paths: PathsConfig,
	pub logging: LoggingConfig,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			environment: DEFAULT_ENVIRONMENT.to_string(),
			http: HttpConfig::default(),
			unsplash: UnsplashConfig::default(),
			paths: PathsConfig::default(),
			logging: LoggingConfig::default(),
		}
	}
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`LUMEN_SERVER_*`, plus `PORT`/`UNSPLASH_ACCESS_KEY`)
/// 2. Config file (`/etc/lumen/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only.
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![Box::new(EnvSource)])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize a merged layer into resolved config, enforcing startup preconditions.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let config = ServerConfig {
		environment: layer
			.environment
			.unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
		http: layer.http.unwrap_or_default().finalize(),
		unsplash: layer.unsplash.unwrap_or_default().finalize(),
		paths: layer.paths.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	info!(
		host = %config.http.host,
		port = config.http.port,
		environment = %config.environment,
		unsplash_base_url = %config.unsplash.base_url,
		web_dir = ?config.paths.web_dir,
		locale = %config.logging.locale,
		"Server configuration loaded"
	);

	Ok(config)
}

fn validate_config(config: &ServerConfig) -> Result<(), ConfigError> {
	if !config.unsplash.is_configured() {
		return Err(ConfigError::MissingRequired {
			key: "unsplash.access_key".to_string(),
			hint: "set LUMEN_SERVER_UNSPLASH_ACCESS_KEY (or UNSPLASH_ACCESS_KEY, or a *_FILE variant)"
				.to_string(),
		});
	}

	if !lumen_common_i18n::is_supported(&config.logging.locale) {
		return Err(ConfigError::Validation(format!(
			"unsupported locale '{}' in logging.locale",
			config.logging.locale
		)));
	}

	Ok(())
}
