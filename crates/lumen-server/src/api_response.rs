// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! API response bodies and helpers shared by handlers.

use std::any::Any;

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use lumen_common_i18n::t;
use serde::{Deserialize, Serialize};

/// Usage example returned alongside an invalid query.
pub const SEARCH_EXAMPLE: &str = "/search/images?query=nature&page=2";

/// Failure body for search errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
	pub details: serde_json::Value,
}

/// Body returned when the `query` parameter is missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidQueryResponse {
	pub error: String,
	pub example: String,
}

/// Body for unmatched routes and uncaught faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
	pub error: String,
}

/// Create a 404 response for an unmatched route.
pub fn route_not_found(locale: &str) -> Response {
	(
		StatusCode::NOT_FOUND,
		Json(MessageResponse {
			error: t(locale, "server.route_not_found"),
		}),
	)
		.into_response()
}

/// Create the generic 500 response.
pub fn internal_error(locale: &str) -> Response {
	(
		StatusCode::INTERNAL_SERVER_ERROR,
		Json(MessageResponse {
			error: t(locale, "server.internal_error"),
		}),
	)
		.into_response()
}

/// Convert a handler panic into the generic 500. The payload is logged only.
pub fn panic_response(locale: &str, panic: Box<dyn Any + Send + 'static>) -> Response {
	let detail = if let Some(s) = panic.downcast_ref::<String>() {
		s.clone()
	} else if let Some(s) = panic.downcast_ref::<&str>() {
		(*s).to_string()
	} else {
		"unknown panic payload".to_string()
	};

	tracing::error!(panic = %detail, "Handler panicked");
	internal_error(locale)
}
