// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logging and message locale configuration section.

use serde::{Deserialize, Serialize};

fn default_level() -> String {
	"info,lumen_server=debug,tower_http::trace=debug".to_string()
}

fn default_locale() -> String {
	"es".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
	pub locale: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.locale.is_some() {
			self.locale = other.locale;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_else(default_level),
			locale: self.locale.unwrap_or_else(default_locale),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
	/// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
	pub level: String,
	/// Locale of user-facing messages.
	pub locale: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: default_level(),
			locale: default_locale(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_values() {
		let config = LoggingConfigLayer::default().finalize();
		assert_eq!(config, LoggingConfig::default());
		assert_eq!(config.locale, "es");
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = LoggingConfigLayer {
			level: Some("info".to_string()),
			locale: Some("es".to_string()),
		};
		base.merge(LoggingConfigLayer {
			level: Some("warn".to_string()),
			locale: None,
		});
		assert_eq!(base.level, Some("warn".to_string()));
		assert_eq!(base.locale, Some("es".to_string()));
	}

	#[test]
	fn test_deserialize_layer_partial() {
		let layer: LoggingConfigLayer = toml::from_str(r#"locale = "en""#).unwrap();
		assert_eq!(layer.locale, Some("en".to_string()));
		assert!(layer.level.is_none());
	}
}
