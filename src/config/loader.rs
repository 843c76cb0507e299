//! Environment-based configuration loading

use super::ClientConfig;
use crate::constants::env::{API_URL_VAR, DEFAULT_ENV_FILE, TOKEN_VAR};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load a dotenv file into the process environment.
///
/// With an explicit `path` the file must exist and parse. Without one, `.env`
/// in the working directory is used and silently skipped when absent; parent
/// directories are not searched. Variables already present in the environment
/// are never overwritten.
///
/// Returns the path of the file that was loaded, if any.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
            debug!(path = %path.display(), "loaded env file");
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::from_path(DEFAULT_ENV_FILE) {
            Ok(()) => {
                debug!(path = DEFAULT_ENV_FILE, "loaded env file");
                Ok(Some(PathBuf::from(DEFAULT_ENV_FILE)))
            }
            Err(err) if err.not_found() => Ok(None),
            Err(err) => Err(err).context("Failed to load .env file"),
        },
    }
}

/// Read a variable, treating unset and blank the same way
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// The token from `GITHUB_TOKEN`, if set
pub fn token_from_env() -> Option<String> {
    non_empty_var(TOKEN_VAR)
}

impl ClientConfig {
    /// Build a config from `GITHUB_TOKEN` and `GITHUB_API_URL`
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Some(token) = token_from_env() {
            config = config.with_token(token);
        }
        if let Some(base_url) = non_empty_var(API_URL_VAR) {
            config = config.with_base_url(base_url);
        }
        config
    }
}
