// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Unsplash provider configuration section.

use lumen_common_config::SecretString;
use serde::{Deserialize, Serialize};

pub const DEFAULT_UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnsplashConfigLayer {
	pub access_key: Option<SecretString>,
	pub base_url: Option<String>,
}

impl UnsplashConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.access_key.is_some() {
			self.access_key = other.access_key;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
	}

	pub fn finalize(self) -> UnsplashConfig {
		UnsplashConfig {
			access_key: self.access_key,
			base_url: self
				.base_url
				.map(|url| url.trim_end_matches('/').to_string())
				.unwrap_or_else(|| DEFAULT_UNSPLASH_BASE_URL.to_string()),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsplashConfig {
	pub access_key: Option<SecretString>,
	pub base_url: String,
}

impl Default for UnsplashConfig {
	fn default() -> Self {
		Self {
			access_key: None,
			base_url: DEFAULT_UNSPLASH_BASE_URL.to_string(),
		}
	}
}

impl UnsplashConfig {
	pub fn is_configured(&self) -> bool {
		self.access_key.is_some()
	}
}
