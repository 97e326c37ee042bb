// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{locale_info, DEFAULT_LOCALE};

/// Resolve the effective locale.
///
/// Resolution order:
/// 1. Requested locale (if supported)
/// 2. Server default locale (if supported)
/// 3. [`DEFAULT_LOCALE`]
///
/// ```
/// use lumen_common_i18n::resolve_locale;
///
/// assert_eq!(resolve_locale(Some("es"), "en"), "es");
/// assert_eq!(resolve_locale(None, "es"), "es");
/// assert_eq!(resolve_locale(Some("fr"), "de"), "en");
/// ```
pub fn resolve_locale(requested: Option<&str>, server_default: &str) -> &'static str {
	requested
		.and_then(locale_info)
		.or_else(|| locale_info(server_default))
		.map(|info| info.code)
		.unwrap_or(DEFAULT_LOCALE)
}
