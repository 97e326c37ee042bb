// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Types for the Unsplash search API and the simplified search contract.

use serde::{Deserialize, Serialize};

/// A validated search: the query is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	query: String,
	page: i64,
}

impl SearchRequest {
	/// Returns `None` when the query is empty after trimming.
	pub fn new(query: &str, page: i64) -> Option<Self> {
		let query = query.trim();
		if query.is_empty() {
			return None;
		}
		Some(Self {
			query: query.to_string(),
			page,
		})
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn page(&self) -> i64 {
		self.page
	}
}

/// Body of a successful `GET /search/photos`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSearchResponse {
	#[serde(default)]
	pub total: Option<u64>,
	#[serde(default)]
	pub total_pages: Option<u64>,
	pub results: Vec<UpstreamImage>,
}

/// One photo as Unsplash returns it. Only the consumed fields are modelled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamImage {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub urls: Option<UpstreamUrls>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub alt_description: Option<String>,
	#[serde(default)]
	pub user: Option<UpstreamUser>,
	#[serde(default)]
	pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamUrls {
	#[serde(default)]
	pub regular: Option<String>,
	#[serde(default)]
	pub full: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamUser {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub links: Option<UpstreamLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamLinks {
	#[serde(default)]
	pub html: Option<String>,
}

/// Search response served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
	pub total: u64,
	pub total_pages: u64,
	pub current_page: i64,
	pub images: Vec<NormalizedImage>,
}

/// A photo after fallback substitution.
///
/// `id` and `url` serialize as `null` when Unsplash omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedImage {
	pub id: Option<String>,
	pub url: Option<String>,
	pub description: String,
	pub user: ImageUser,
	pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUser {
	pub name: String,
	pub profile: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		/// Whitespace-only queries never produce a request.
		#[test]
		fn blank_query_is_rejected(query in "[ \t\r\n]*", page in any::<i64>()) {
			prop_assert!(SearchRequest::new(&query, page).is_none());
		}

		/// Accepted queries are stored trimmed and non-empty.
		#[test]
		fn accepted_query_is_trimmed(query in "\\PC*", page in any::<i64>()) {
			if let Some(request) = SearchRequest::new(&query, page) {
				prop_assert_eq!(request.query(), query.trim());
				prop_assert!(!request.query().is_empty());
				prop_assert_eq!(request.page(), page);
			}
		}
	}

	#[test]
	fn test_request_trims_query() {
		let request = SearchRequest::new("  nature \n", 2).unwrap();
		assert_eq!(request.query(), "nature");
		assert_eq!(request.page(), 2);
	}

	#[test]
	fn test_upstream_response_ignores_unknown_fields() {
		let body = r##"{
			"total": 1,
			"total_pages": 1,
			"results": [{
				"id": "a1",
				"width": 4000,
				"urls": { "raw": "r", "regular": "http://x/r.jpg" },
				"user": { "name": "Jane", "username": "jane" }
			}]
		}"##;
		let parsed: UpstreamSearchResponse = serde_json::from_str(body).unwrap();
		assert_eq!(parsed.results.len(), 1);
		assert_eq!(parsed.results[0].id.as_deref(), Some("a1"));
		assert!(parsed.results[0].color.is_none());
	}

	#[test]
	fn test_upstream_response_accepts_null_fields() {
		let body = r#"{"total": null, "results": [{"description": null, "user": null}]}"#;
		let parsed: UpstreamSearchResponse = serde_json::from_str(body).unwrap();
		assert!(parsed.total.is_none());
		assert!(parsed.total_pages.is_none());
		assert!(parsed.results[0].user.is_none());
	}

	#[test]
	fn test_missing_url_serializes_as_null() {
		let image = NormalizedImage {
			id: Some("a1".to_string()),
			url: None,
			description: "nature".to_string(),
			user: ImageUser {
				name: "Jane".to_string(),
				profile: "#".to_string(),
			},
			color: "#cccccc".to_string(),
		};
		let json = serde_json::to_value(&image).unwrap();
		assert!(json["url"].is_null());
		assert_eq!(json["user"]["profile"], "#");
	}
}
