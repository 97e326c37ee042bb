// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Unsplash API client.

use thiserror::Error;

/// Errors that can occur when searching Unsplash.
#[derive(Debug, Error)]
pub enum UnsplashError {
	/// The request could not be built or sent.
	#[error("Failed to build Unsplash request: {0}")]
	Request(String),

	/// Request sent but no response arrived before the timeout.
	#[error("Request timed out")]
	Timeout,

	/// Request sent but the connection failed before a response arrived.
	#[error("Network error: {0}")]
	Network(#[source] reqwest::Error),

	/// Unsplash answered with a non-success status.
	///
	/// `details` is the first entry of the upstream `errors` array when there
	/// is one, otherwise the whole upstream body.
	#[error("Unsplash API error: {status}")]
	Api {
		status: u16,
		details: serde_json::Value,
	},

	/// A response arrived but does not follow the search contract.
	#[error("Unexpected response format from Unsplash: {0}")]
	InvalidResponse(String),
}

impl UnsplashError {
	/// True when the request left the process but nothing came back.
	pub fn is_no_response(&self) -> bool {
		matches!(self, UnsplashError::Timeout | UnsplashError::Network(_))
	}

	/// Upstream HTTP status, if Unsplash answered at all.
	pub fn upstream_status(&self) -> Option<u16> {
		match self {
			UnsplashError::Api { status, .. } => Some(*status),
			_ => None,
		}
	}
}
