// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Common configuration primitives for Lumen.
//!
//! - [`Secret<T>`]: re-exported from [`lumen_common_secret`]
//! - [`load_secret_env`]: read a secret from `VAR` or from the file named by
//!   `VAR_FILE`

pub mod env;

pub use lumen_common_secret::{Secret, SecretString, REDACTED};

pub use env::{load_secret_env, SecretEnvError};
