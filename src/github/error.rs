//! Error type shared by every GitHub API operation
//!
//! Rate-limit exhaustion, HTTP error statuses and transport failures all
//! collapse into [`GitHubError`]. Callers only ever branch on success versus
//! failure, so the error carries nothing but a human-readable message.

use std::error::Error as _;
use thiserror::Error;

/// Failure of a GitHub API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GitHubError {
    message: String,
}

impl GitHubError {
    /// Create an error from an arbitrary message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable description of the failure
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The unauthenticated or per-token quota is exhausted.
    /// `reset` is the raw `x-ratelimit-reset` header value (epoch seconds).
    pub(crate) fn rate_limited(reset: &str) -> Self {
        Self::new(format!(
            "Rate limit exceeded. Reset at epoch {}. Add a token or wait.",
            reset
        ))
    }

    /// The API answered with a 4xx/5xx status
    pub(crate) fn status(code: u16, message: &str) -> Self {
        Self::new(format!("{} Error: {}", code, message))
    }
}

impl From<reqwest::Error> for GitHubError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest keeps the interesting part (connection refused, timeout,
        // certificate problems) in the source chain
        let mut message = format!("Request failed: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(&format!(": {}", cause));
            source = cause.source();
        }
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_message_keeps_reset_verbatim() {
        let err = GitHubError::rate_limited("1700000000");
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded. Reset at epoch 1700000000. Add a token or wait."
        );
    }

    #[test]
    fn test_status_message_format() {
        let err = GitHubError::status(404, "Not Found");
        assert_eq!(err.message(), "404 Error: Not Found");
    }

    #[test]
    fn test_display_matches_message() {
        let err = GitHubError::new("boom");
        assert_eq!(format!("{}", err), err.message());
    }
}
