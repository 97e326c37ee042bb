// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata.

/// Metadata about a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// ISO 639-1 language code
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
}

/// Fallback used when neither the requested nor the configured locale is known.
pub const DEFAULT_LOCALE: &str = "en";

pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
	},
	LocaleInfo {
		code: "es",
		name: "Spanish",
		native_name: "Español",
	},
];

pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == locale)
}

pub fn is_supported(locale: &str) -> bool {
	locale_info(locale).is_some()
}

pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}
