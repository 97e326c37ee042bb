// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Gettext catalog loading and the translation function.

use std::collections::HashMap;

use gettext::Catalog;
use once_cell::sync::Lazy;

use crate::locale::DEFAULT_LOCALE;

const EN_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/en.mo"));
const ES_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/es.mo"));

static CATALOGS: Lazy<HashMap<&'static str, Catalog>> = Lazy::new(|| {
	let mut map = HashMap::new();

	match Catalog::parse(EN_MO) {
		Ok(catalog) => {
			map.insert("en", catalog);
		}
		Err(e) => tracing::error!(error = %e, "Failed to parse English translation catalog"),
	}

	match Catalog::parse(ES_MO) {
		Ok(catalog) => {
			map.insert("es", catalog);
		}
		Err(e) => tracing::warn!(error = %e, "Failed to parse Spanish translation catalog"),
	}

	tracing::debug!(locales = map.len(), "message catalogs loaded");
	map
});

fn lookup(locale: &str, msgid: &str) -> Option<String> {
	let translated = CATALOGS.get(locale)?.gettext(msgid);
	(translated != msgid).then(|| translated.to_string())
}

/// Translate a message key.
///
/// Falls back to the English catalog, then to the key itself.
pub fn t(locale: &str, msgid: &str) -> String {
	if let Some(translated) = lookup(locale, msgid) {
		return translated;
	}

	if locale != DEFAULT_LOCALE {
		if let Some(translated) = lookup(DEFAULT_LOCALE, msgid) {
			return translated;
		}
	}

	msgid.to_string()
}
