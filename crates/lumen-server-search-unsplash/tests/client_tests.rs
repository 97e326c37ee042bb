// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::time::Duration;

use lumen_common_config::Secret;
use lumen_server_search_unsplash::{SearchRequest, UnsplashClient, UnsplashError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> UnsplashClient {
	UnsplashClient::new(Secret::new("test-key".to_string()))
		.unwrap()
		.with_base_url(server.uri())
		.with_anonymous_name("Anónimo")
}

fn nature_body() -> serde_json::Value {
	json!({
		"total": 2,
		"total_pages": 1,
		"results": [
			{
				"id": "a1",
				"urls": { "regular": "http://x/r.jpg" },
				"description": "Forest",
				"user": { "name": "Jane", "links": { "html": "http://u/jane" } },
				"color": "#112233"
			},
			{
				"id": "a2",
				"urls": { "full": "http://x/f2.jpg" },
				"alt_description": "lake"
			}
		]
	})
}

#[tokio::test]
async fn test_search_sends_expected_request() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search/photos"))
		.and(query_param("query", "nature"))
		.and(query_param("per_page", "20"))
		.and(query_param("page", "2"))
		.and(header("Authorization", "Client-ID test-key"))
		.and(header("Accept-Version", "v1"))
		.respond_with(ResponseTemplate::new(200).set_body_json(nature_body()))
		.expect(1)
		.mount(&server)
		.await;

	let request = SearchRequest::new("  nature ", 2).unwrap();
	let result = client_for(&server).search_photos(&request).await.unwrap();

	assert_eq!(result.total, 2);
	assert_eq!(result.total_pages, 1);
	assert_eq!(result.current_page, 2);
	assert_eq!(result.images.len(), 2);

	let first = &result.images[0];
	assert_eq!(first.id.as_deref(), Some("a1"));
	assert_eq!(first.url.as_deref(), Some("http://x/r.jpg"));
	assert_eq!(first.description, "Forest");
	assert_eq!(first.user.name, "Jane");
	assert_eq!(first.user.profile, "http://u/jane");
	assert_eq!(first.color, "#112233");

	let second = &result.images[1];
	assert_eq!(second.url.as_deref(), Some("http://x/f2.jpg"));
	assert_eq!(second.description, "lake");
	assert_eq!(second.user.name, "Anónimo");
	assert_eq!(second.user.profile, "#");
	assert_eq!(second.color, "#cccccc");
}

#[tokio::test]
async fn test_search_is_idempotent() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search/photos"))
		.respond_with(ResponseTemplate::new(200).set_body_json(nature_body()))
		.expect(2)
		.mount(&server)
		.await;

	let client = client_for(&server);
	let request = SearchRequest::new("nature", 1).unwrap();
	let first = client.search_photos(&request).await.unwrap();
	let second = client.search_photos(&request).await.unwrap();
	assert_eq!(first, second);
}

#[tokio::test]
async fn test_api_error_carries_status_and_first_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search/photos"))
		.respond_with(
			ResponseTemplate::new(403).set_body_json(json!({ "errors": ["Rate Limit Exceeded"] })),
		)
		.mount(&server)
		.await;

	let request = SearchRequest::new("nature", 1).unwrap();
	let err = client_for(&server).search_photos(&request).await.unwrap_err();

	match err {
		UnsplashError::Api { status, details } => {
			assert_eq!(status, 403);
			assert_eq!(details, json!("Rate Limit Exceeded"));
		}
		other => panic!("expected Api error, got {other:?}"),
	}
}

#[tokio::test]
async fn test_api_error_with_plain_text_body() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
		.mount(&server)
		.await;

	let request = SearchRequest::new("nature", 1).unwrap();
	let err = client_for(&server).search_photos(&request).await.unwrap_err();

	assert_eq!(err.upstream_status(), Some(502));
	match err {
		UnsplashError::Api { details, .. } => assert_eq!(details, json!("Bad Gateway")),
		other => panic!("expected Api error, got {other:?}"),
	}
}

#[tokio::test]
async fn test_results_not_an_array_is_invalid_response() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 1, "results": "nope" })))
		.mount(&server)
		.await;

	let request = SearchRequest::new("nature", 1).unwrap();
	let err = client_for(&server).search_photos(&request).await.unwrap_err();
	assert!(matches!(err, UnsplashError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_non_json_success_is_invalid_response() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
		.mount(&server)
		.await;

	let request = SearchRequest::new("nature", 1).unwrap();
	let err = client_for(&server).search_photos(&request).await.unwrap_err();
	assert!(matches!(err, UnsplashError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(nature_body())
				.set_delay(Duration::from_secs(2)),
		)
		.mount(&server)
		.await;

	let client = client_for(&server).with_timeout(Duration::from_millis(100));
	let request = SearchRequest::new("nature", 1).unwrap();
	let err = client.search_photos(&request).await.unwrap_err();

	assert!(matches!(err, UnsplashError::Timeout));
	assert!(err.is_no_response());
}

#[tokio::test]
async fn test_unreachable_upstream_is_network_error() {
	let client = UnsplashClient::new(Secret::new("test-key".to_string()))
		.unwrap()
		.with_base_url("http://127.0.0.1:1");
	let request = SearchRequest::new("nature", 1).unwrap();
	let err = client.search_photos(&request).await.unwrap_err();

	assert!(err.is_no_response(), "expected no-response error, got {err:?}");
}
