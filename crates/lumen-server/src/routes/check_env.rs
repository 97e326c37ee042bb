// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration probe handler.

use axum::{extract::State, Json};
use lumen_common_i18n::t;
use serde::{Deserialize, Serialize};

use crate::api::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEnvResponse {
	pub status: String,
	pub port: u16,
	pub unsplash_key: String,
}

/// GET /check-env - Report the listening port and whether the access key is set.
pub async fn check_env(State(state): State<AppState>) -> Json<CheckEnvResponse> {
	let key = if state.config.unsplash.is_configured() {
		"server.check_env.key_configured"
	} else {
		"server.check_env.key_missing"
	};

	Json(CheckEnvResponse {
		status: "OK".to_string(),
		port: state.config.http.port,
		unsplash_key: t(state.locale, key),
	})
}
