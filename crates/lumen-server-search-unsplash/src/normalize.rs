// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Reshaping of Unsplash photos into [`NormalizedImage`].
//!
//! Every optional field resolves through an ordered list of candidates. Empty
//! strings count as absent, so `""` in a description still falls through to
//! the alt text and then to the query.

use crate::types::{
	ImageUser, NormalizedImage, SearchRequest, SearchResult, UpstreamImage, UpstreamSearchResponse,
};

pub const DEFAULT_PROFILE_URL: &str = "#";
pub const DEFAULT_COLOR: &str = "#cccccc";

/// Values substituted when a photo lacks a description or an author name.
#[derive(Debug, Clone, Copy)]
pub struct Fallbacks<'a> {
	pub query: &'a str,
	pub anonymous_name: &'a str,
}

fn first_present<'a, I>(candidates: I) -> Option<&'a str>
where
	I: IntoIterator<Item = Option<&'a str>>,
{
	candidates
		.into_iter()
		.flatten()
		.find(|value| !value.is_empty())
}

/// Normalize a single upstream photo.
pub fn normalize_image(image: &UpstreamImage, fallbacks: Fallbacks<'_>) -> NormalizedImage {
	let urls = image.urls.as_ref();
	let user = image.user.as_ref();

	let url = first_present([
		urls.and_then(|u| u.regular.as_deref()),
		urls.and_then(|u| u.full.as_deref()),
	]);

	let description = first_present([
		image.description.as_deref(),
		image.alt_description.as_deref(),
		Some(fallbacks.query),
	])
	.unwrap_or_default();

	let name = first_present([
		user.and_then(|u| u.name.as_deref()),
		Some(fallbacks.anonymous_name),
	])
	.unwrap_or_default();

	let profile = first_present([user
		.and_then(|u| u.links.as_ref())
		.and_then(|l| l.html.as_deref())])
	.unwrap_or(DEFAULT_PROFILE_URL);

	let color = first_present([image.color.as_deref()]).unwrap_or(DEFAULT_COLOR);

	NormalizedImage {
		id: image.id.clone(),
		url: url.map(str::to_string),
		description: description.to_string(),
		user: ImageUser {
			name: name.to_string(),
			profile: profile.to_string(),
		},
		color: color.to_string(),
	}
}

/// Normalize a whole search response. Order and count of results are kept.
pub fn normalize_response(
	response: &UpstreamSearchResponse,
	request: &SearchRequest,
	anonymous_name: &str,
) -> SearchResult {
	let fallbacks = Fallbacks {
		query: request.query(),
		anonymous_name,
	};

	SearchResult {
		total: response.total.unwrap_or(0),
		total_pages: response.total_pages.unwrap_or(0),
		current_page: request.page(),
		images: response
			.results
			.iter()
			.map(|image| normalize_image(image, fallbacks))
			.collect(),
	}
}
