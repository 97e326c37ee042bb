// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment helpers for loading secrets.
//!
//! Supports the `*_FILE` convention used by Docker and Kubernetes secrets, so
//! the photo API access key can be mounted as a file instead of being placed
//! in the process environment.

use std::path::PathBuf;
use std::{env, fs};

use lumen_common_secret::Secret;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Load a secret using the `VAR` / `VAR_FILE` convention.
///
/// `{var}_FILE` wins over `{var}`. A single trailing newline is stripped from
/// file contents. An empty value, from either source, counts as unset.
///
/// ```no_run
/// use lumen_common_config::load_secret_env;
///
/// if let Some(key) = load_secret_env("UNSPLASH_ACCESS_KEY")? {
///     println!("access key configured: {key}"); // prints "[REDACTED]"
/// }
/// # Ok::<(), lumen_common_config::SecretEnvError>(())
/// ```
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|e| SecretEnvError::Io {
			path: path.clone(),
			source: e,
		})?;

		let secret = content.strip_suffix('\n').unwrap_or(&content);
		if secret.is_empty() {
			return Ok(None);
		}
		return Ok(Some(Secret::new(secret.to_string())));
	}

	match env::var(var) {
		Ok(value) if !value.is_empty() => Ok(Some(Secret::new(value))),
		_ => Ok(None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn returns_none_when_not_set() {
		let var = "LUMEN_TEST_SECRET_UNSET";
		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));

		assert!(load_secret_env(var).unwrap().is_none());
	}

	#[test]
	fn reads_from_direct_env_var() {
		let var = "LUMEN_TEST_SECRET_DIRECT";
		env::set_var(var, "direct-value");
		env::remove_var(format!("{var}_FILE"));

		let secret = load_secret_env(var).unwrap().unwrap();
		assert_eq!(secret.expose(), "direct-value");

		env::remove_var(var);
	}

	#[test]
	fn empty_direct_value_counts_as_unset() {
		let var = "LUMEN_TEST_SECRET_EMPTY";
		env::set_var(var, "");
		env::remove_var(format!("{var}_FILE"));

		assert!(load_secret_env(var).unwrap().is_none());

		env::remove_var(var);
	}

	#[test]
	fn file_var_takes_precedence_and_strips_newline() {
		let var = "LUMEN_TEST_SECRET_FILE";
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "file-value").unwrap();

		env::set_var(var, "direct-value");
		env::set_var(format!("{var}_FILE"), file.path().to_str().unwrap());

		let secret = load_secret_env(var).unwrap().unwrap();
		assert_eq!(secret.expose(), "file-value");

		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn missing_file_is_an_error() {
		let var = "LUMEN_TEST_SECRET_MISSING_FILE";
		env::set_var(format!("{var}_FILE"), "/nonexistent/lumen/secret");

		let result = load_secret_env(var);
		assert!(matches!(result, Err(SecretEnvError::Io { .. })));

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn empty_file_path_is_an_error() {
		let var = "LUMEN_TEST_SECRET_EMPTY_PATH";
		env::set_var(format!("{var}_FILE"), "");

		let result = load_secret_env(var);
		assert!(matches!(result, Err(SecretEnvError::EmptyPath { .. })));

		env::remove_var(format!("{var}_FILE"));
	}
}
