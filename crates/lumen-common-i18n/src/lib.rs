// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Lumen.
//!
//! User-facing strings (API error messages, placeholders) live in GNU gettext
//! catalogs under `locales/` and are looked up by a dot-separated key with a
//! `server.` prefix, e.g. `server.search.rate_limited`.
//!
//! ```
//! use lumen_common_i18n::{resolve_locale, t};
//!
//! let locale = resolve_locale(Some("es"), "en");
//! assert_eq!(t(locale, "server.route_not_found"), "Ruta no encontrada");
//! ```

mod catalog;
mod locale;
mod resolve;

pub use catalog::t;
pub use locale::{available_locales, is_supported, locale_info, LocaleInfo};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
