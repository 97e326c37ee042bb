// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Unsplash photo search client for Lumen.
//!
//! This crate issues the single outbound search call, validates the shape of
//! the upstream payload and reshapes it into the simplified [`SearchResult`]
//! contract served to browsers.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{UnsplashClient, PER_PAGE};
pub use error::UnsplashError;
pub use normalize::{normalize_image, normalize_response, Fallbacks};
pub use types::{
	ImageUser, NormalizedImage, SearchRequest, SearchResult, UpstreamImage, UpstreamLinks,
	UpstreamSearchResponse, UpstreamUrls, UpstreamUser,
};
