// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Image search handler.

use axum::{
	extract::{Query, State},
	Json,
};
use lumen_server_search_unsplash::SearchResult;
use tracing::{debug, error};

use crate::{api::AppState, error::SearchApiError, validation};

/// GET /search/images - Search Unsplash and return simplified results.
///
/// Query parameters: `query` (required, non-blank) and `page` (defaults to 1).
pub async fn search_images(
	State(state): State<AppState>,
	Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResult>, SearchApiError> {
	let locale = state.locale;

	let request = validation::search_request(&params).ok_or_else(|| {
		debug!("Rejected search with missing or blank query");
		SearchApiError::InvalidQuery { locale }
	})?;

	let client = state.unsplash_client.as_ref().ok_or_else(|| {
		error!("Unsplash client is not configured");
		SearchApiError::NotConfigured { locale }
	})?;

	match client.search_photos(&request).await {
		Ok(result) => Ok(Json(result)),
		Err(e) => {
			error!(error = %e, "Error searching images");
			Err(SearchApiError::upstream(locale, e))
		}
	}
}
