// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Lumen.
//!
//! Every outbound client is built from [`builder`] so upstream providers see
//! a consistent User-Agent.

mod client;

pub use client::{builder, platform, user_agent};
