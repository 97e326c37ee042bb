// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Lumen image-search proxy server.
//!
//! This crate provides the HTTP surface in front of the Unsplash search API:
//! query validation, the outbound search, error mapping and static files.

pub mod api;
pub mod api_response;
pub mod error;
pub mod routes;
pub mod validation;

pub use api::{api_routes, create_app_state, create_router, with_fallbacks, AppState};
pub use error::SearchApiError;
pub use lumen_server_config::ServerConfig;
