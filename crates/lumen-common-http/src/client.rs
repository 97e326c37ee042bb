// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client builder with the standard Lumen User-Agent header.
///
/// Callers add their own timeout before building:
///
/// ```ignore
/// let client = lumen_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the standard Lumen User-Agent string.
///
/// Format: `lumen/{platform}/{version}`, e.g. `lumen/linux-x86_64/0.1.0`.
pub fn user_agent() -> String {
	format!("lumen/{}/{}", platform(), env!("CARGO_PKG_VERSION"))
}

/// Platform string in `{os}-{arch}` format.
pub fn platform() -> String {
	format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}
