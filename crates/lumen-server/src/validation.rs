// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Validation of search query-string parameters.

use lumen_server_search_unsplash::SearchRequest;

pub const DEFAULT_PAGE: i64 = 1;

/// Coerce a raw `page` value into a page number.
///
/// Reads an optional sign and the leading decimal digits after any leading
/// whitespace; anything after the digits is ignored. Missing, non-numeric,
/// zero and out-of-range values become [`DEFAULT_PAGE`]. Negative values are
/// returned unchanged.
pub fn coerce_page(raw: Option<&str>) -> i64 {
	let Some(raw) = raw else {
		return DEFAULT_PAGE;
	};

	let s = raw.trim_start();
	let (negative, rest) = match s.as_bytes().first() {
		Some(b'-') => (true, &s[1..]),
		Some(b'+') => (false, &s[1..]),
		_ => (false, s),
	};

	let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
	if digits_len == 0 {
		return DEFAULT_PAGE;
	}

	let digits = &rest[..digits_len];
	let parsed = if negative {
		format!("-{digits}").parse::<i64>()
	} else {
		digits.parse::<i64>()
	};

	match parsed {
		Ok(0) | Err(_) => DEFAULT_PAGE,
		Ok(page) => page,
	}
}

/// Build a [`SearchRequest`] from the decoded query-string pairs.
///
/// `query` must appear exactly once and be non-empty after trimming. `page`
/// is taken from its first occurrence.
pub fn search_request(params: &[(String, String)]) -> Option<SearchRequest> {
	let mut queries = params.iter().filter(|(k, _)| k == "query").map(|(_, v)| v);
	let query = queries.next()?;
	if queries.next().is_some() {
		return None;
	}

	let page = params
		.iter()
		.find(|(k, _)| k == "page")
		.map(|(_, v)| v.as_str());

	SearchRequest::new(query, coerce_page(page))
}
