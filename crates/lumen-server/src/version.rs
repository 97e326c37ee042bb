// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Version information for lumen-server.

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"lumen-server version: {}\n\
         Platform:             {}\n\
         User-Agent:           {}",
		env!("CARGO_PKG_VERSION"),
		lumen_common_http::platform(),
		lumen_common_http::user_agent(),
	)
}
