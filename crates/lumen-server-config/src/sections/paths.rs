// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static asset paths.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathsConfigLayer {
	pub web_dir: Option<String>,
}

impl PathsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.web_dir.is_some() {
			self.web_dir = other.web_dir;
		}
	}

	pub fn finalize(self) -> PathsConfig {
		PathsConfig {
			web_dir: self.web_dir,
		}
	}
}

/// Directory holding the landing page (`index.html`) and its assets.
///
/// `None` means the assets bundled with the server crate, independent of the
/// working directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
	pub web_dir: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_web_dir_is_bundled() {
		assert!(PathsConfigLayer::default().finalize().web_dir.is_none());
	}

	#[test]
	fn test_merge_keeps_base_when_overlay_empty() {
		let mut base = PathsConfigLayer {
			web_dir: Some("/srv/lumen/web".to_string()),
		};
		base.merge(PathsConfigLayer::default());
		assert_eq!(base.finalize().web_dir.as_deref(), Some("/srv/lumen/web"));
	}
}
