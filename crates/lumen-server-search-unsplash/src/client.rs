// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Unsplash API client implementation.

use std::time::Duration;

use lumen_common_config::SecretString;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, trace, warn};

use crate::error::UnsplashError;
use crate::normalize::normalize_response;
use crate::types::{SearchRequest, SearchResult, UpstreamSearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";
const SEARCH_PATH: &str = "/search/photos";
const API_VERSION: &str = "v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_ANONYMOUS_NAME: &str = "Anonymous";

/// Results requested per page. Not configurable.
pub const PER_PAGE: u32 = 20;

/// Client for the Unsplash photo search endpoint.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
	http_client: Client,
	access_key: SecretString,
	base_url: String,
	timeout: Duration,
	anonymous_name: String,
}

#[derive(Debug, Serialize)]
struct SearchPhotosQuery<'a> {
	query: &'a str,
	per_page: u32,
	page: i64,
}

impl UnsplashClient {
	/// Creates a new client authenticating with the given access key.
	pub fn new(access_key: SecretString) -> Result<Self, UnsplashError> {
		let http_client = lumen_common_http::builder()
			.build()
			.map_err(|e| UnsplashError::Request(e.to_string()))?;

		Ok(Self {
			http_client,
			access_key,
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: REQUEST_TIMEOUT,
			anonymous_name: DEFAULT_ANONYMOUS_NAME.to_string(),
		})
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	/// Overrides the per-request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Sets the author name used for photos without one.
	pub fn with_anonymous_name(mut self, name: impl Into<String>) -> Self {
		self.anonymous_name = name.into();
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Searches photos and returns the normalized page of results.
	#[instrument(skip(self, request), fields(query = %request.query(), page = request.page()))]
	pub async fn search_photos(&self, request: &SearchRequest) -> Result<SearchResult, UnsplashError> {
		let url = format!("{}{}", self.base_url, SEARCH_PATH);
		let params = SearchPhotosQuery {
			query: request.query(),
			per_page: PER_PAGE,
			page: request.page(),
		};

		debug!(url = %url, "Sending search request to Unsplash");
		trace!(per_page = PER_PAGE, "Search parameters");

		let response = self
			.http_client
			.get(&url)
			.query(&params)
			.header(
				"Authorization",
				format!("Client-ID {}", self.access_key.expose()),
			)
			.header("Accept-Version", API_VERSION)
			.timeout(self.timeout)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					warn!("Request to Unsplash timed out");
					return UnsplashError::Timeout;
				}
				if e.is_builder() {
					warn!(error = %e, "Failed to build Unsplash request");
					return UnsplashError::Request(e.to_string());
				}
				warn!(error = %e, "Network error during Unsplash request");
				UnsplashError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Unsplash");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			let details = error_details(&body);
			warn!(status = status.as_u16(), details = %details, "Unsplash API error");
			return Err(UnsplashError::Api {
				status: status.as_u16(),
				details,
			});
		}

		let body = response.text().await.map_err(|e| {
			if e.is_timeout() {
				return UnsplashError::Timeout;
			}
			UnsplashError::Network(e)
		})?;

		trace!(bytes = body.len(), "Response body");

		let value: serde_json::Value = serde_json::from_str(&body)
			.map_err(|e| UnsplashError::InvalidResponse(format!("JSON parse error: {e}")))?;

		if !value.get("results").is_some_and(serde_json::Value::is_array) {
			return Err(UnsplashError::InvalidResponse(
				"\"results\" is missing or not an array".to_string(),
			));
		}

		let upstream: UpstreamSearchResponse = serde_json::from_value(value)
			.map_err(|e| UnsplashError::InvalidResponse(e.to_string()))?;

		let result = normalize_response(&upstream, request, &self.anonymous_name);

		debug!(
			result_count = result.images.len(),
			total = result.total,
			"Search completed successfully"
		);

		Ok(result)
	}
}

/// Extracts the client-facing details of an upstream error body.
///
/// First entry of a non-empty `errors` array (unless it is `null`, `false`,
/// `0` or an empty string), else the JSON body, else the raw text. Empty
/// bodies yield `null`.
fn error_details(body: &str) -> serde_json::Value {
	if body.trim().is_empty() {
		return serde_json::Value::Null;
	}

	match serde_json::from_str::<serde_json::Value>(body) {
		Ok(json) => match json
			.get("errors")
			.and_then(|e| e.as_array())
			.and_then(|e| e.first())
			.filter(|first| !is_blank(first))
		{
			Some(first) => first.clone(),
			None => json,
		},
		Err(_) => serde_json::Value::String(body.to_string()),
	}
}

fn is_blank(value: &serde_json::Value) -> bool {
	match value {
		serde_json::Value::Null => true,
		serde_json::Value::Bool(b) => !b,
		serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
		serde_json::Value::String(s) => s.is_empty(),
		_ => false,
	}
}
