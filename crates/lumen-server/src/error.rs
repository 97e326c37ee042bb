// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search failures and their client-facing responses.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use lumen_common_i18n::t;
use lumen_server_search_unsplash::UnsplashError;

use crate::api_response::{internal_error, ErrorResponse, InvalidQueryResponse, SEARCH_EXAMPLE};

/// A failed search, carrying the locale its message is rendered in.
#[derive(Debug, thiserror::Error)]
pub enum SearchApiError {
	#[error("invalid \"query\" parameter")]
	InvalidQuery { locale: &'static str },

	#[error("Unsplash client is not configured")]
	NotConfigured { locale: &'static str },

	#[error("{source}")]
	Upstream {
		locale: &'static str,
		#[source]
		source: UnsplashError,
	},
}

impl SearchApiError {
	pub fn upstream(locale: &'static str, source: UnsplashError) -> Self {
		SearchApiError::Upstream { locale, source }
	}

	/// Status code sent to the client.
	pub fn status(&self) -> StatusCode {
		match self {
			SearchApiError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
			SearchApiError::NotConfigured { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			SearchApiError::Upstream { source, .. } => match source {
				UnsplashError::Api { status, .. } => {
					StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
				}
				_ => StatusCode::INTERNAL_SERVER_ERROR,
			},
		}
	}
}

fn upstream_body(locale: &str, source: UnsplashError) -> ErrorResponse {
	match source {
		UnsplashError::Api { status, details } => {
			let key = match status {
				401 => "server.search.unauthorized",
				403 => "server.search.rate_limited",
				404 => "server.search.no_results",
				_ => "server.search.failed",
			};
			ErrorResponse {
				error: t(locale, key),
				details,
			}
		}
		UnsplashError::Timeout | UnsplashError::Network(_) => ErrorResponse {
			error: t(locale, "server.search.no_response"),
			details: t(locale, "server.search.no_response_details").into(),
		},
		UnsplashError::InvalidResponse(_) => ErrorResponse {
			error: t(locale, "server.search.failed"),
			details: t(locale, "server.search.unexpected_format").into(),
		},
		UnsplashError::Request(message) => ErrorResponse {
			error: t(locale, "server.search.failed"),
			details: message.into(),
		},
	}
}

impl IntoResponse for SearchApiError {
	fn into_response(self) -> Response {
		let status = self.status();
		match self {
			SearchApiError::InvalidQuery { locale } => (
				status,
				Json(InvalidQueryResponse {
					error: t(locale, "server.search.invalid_query"),
					example: SEARCH_EXAMPLE.to_string(),
				}),
			)
				.into_response(),
			SearchApiError::NotConfigured { locale } => internal_error(locale),
			SearchApiError::Upstream { locale, source } => {
				(status, Json(upstream_body(locale, source))).into_response()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn api(status: u16) -> SearchApiError {
		SearchApiError::upstream(
			"es",
			UnsplashError::Api {
				status,
				details: json!("upstream says no"),
			},
		)
	}

	#[test]
	fn test_status_mapping() {
		assert_eq!(
			SearchApiError::InvalidQuery { locale: "es" }.status(),
			StatusCode::BAD_REQUEST
		);
		assert_eq!(api(401).status(), StatusCode::UNAUTHORIZED);
		assert_eq!(api(403).status(), StatusCode::FORBIDDEN);
		assert_eq!(api(503).status(), StatusCode::SERVICE_UNAVAILABLE);
		assert_eq!(
			SearchApiError::upstream("es", UnsplashError::Timeout).status(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}

	#[test]
	fn test_upstream_messages() {
		assert_eq!(
			upstream_body("es", UnsplashError::Api { status: 401, details: json!(null) }).error,
			"Problema de autenticación - Verifica tu API Key"
		);
		assert_eq!(
			upstream_body("es", UnsplashError::Api { status: 403, details: json!(null) }).error,
			"Límite de peticiones excedido"
		);
		assert_eq!(
			upstream_body("es", UnsplashError::Api { status: 404, details: json!(null) }).error,
			"No se encontraron resultados"
		);
		assert_eq!(
			upstream_body("es", UnsplashError::Api { status: 500, details: json!(null) }).error,
			"Error al buscar imágenes"
		);
	}

	#[test]
	fn test_no_response_body() {
		let body = upstream_body("es", UnsplashError::Timeout);
		assert_eq!(body.error, "No se recibió respuesta de Unsplash API");
		assert_eq!(body.details, json!("Timeout o problema de red"));
	}

	#[test]
	fn test_request_error_carries_message() {
		let body = upstream_body("en", UnsplashError::Request("bad url".to_string()));
		assert_eq!(body.error, "Failed to search images");
		assert_eq!(body.details, json!("bad url"));
	}

	#[test]
	fn test_invalid_response_details() {
		let body = upstream_body("es", UnsplashError::InvalidResponse("x".to_string()));
		assert_eq!(body.error, "Error al buscar imágenes");
		assert_eq!(body.details, json!("Formato de respuesta inesperado de Unsplash"));
	}
}
