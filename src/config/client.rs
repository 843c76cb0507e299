//! Settings for a single GitHub API client

use crate::constants::github::{API_BASE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Immutable settings a [`GitHubClient`](crate::github::GitHubClient) is built from
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root every request path is appended to
    pub base_url: String,
    /// Bearer token; `None` means unauthenticated requests
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout: f64,
    /// Value of the `user-agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different API root, e.g. GitHub Enterprise
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the bearer token. Blank tokens count as no token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
        self
    }

    pub fn with_timeout(mut self, timeout: f64) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.base_url, "https://api.github.com");
        assert_eq!(config.timeout, 15.0);
        assert!(config.token.is_none());
        assert!(config.user_agent.starts_with("gh-client/"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let config = ClientConfig::new().with_base_url("http://localhost:8080//");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = ClientConfig::new().with_token("   ");
        assert!(!config.is_authenticated());

        let config = ClientConfig::new().with_token("");
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new()
            .with_token("ghp_abc")
            .with_timeout(2.5)
            .with_base_url("https://github.example.com/api/v3");
        assert_eq!(config.token.as_deref(), Some("ghp_abc"));
        assert_eq!(config.timeout, 2.5);
        assert_eq!(config.base_url, "https://github.example.com/api/v3");
    }
}
