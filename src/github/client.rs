//! GitHub API client implementation
//!
//! [`GitHubClient`] owns the HTTP session: base URL, default headers, bearer
//! token and timeout are fixed when it is built and apply to every request it
//! sends. Endpoint modules extend the client with `impl` blocks:
//! - `users.rs` - authenticated user and public profiles
//! - `repositories.rs` - repository listings
//! - `issues.rs` - repository issues
//!
//! All endpoints go through `GitHubClient::get`, which percent-encodes each
//! path segment and classifies the response into a [`Payload`] or a
//! [`GitHubError`].

use super::auth::GitHubAuth;
use super::error::GitHubError;
use super::types::Payload;
use crate::config::{ClientConfig, loader::token_from_env};
use crate::constants::github::{
    ACCEPT_MEDIA_TYPE, DEFAULT_TIMEOUT_SECS, RATELIMIT_REMAINING_HEADER, RATELIMIT_RESET_HEADER,
};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

/// GitHub API client for read-only REST calls
///
/// ## Example
///
/// ```rust,no_run
/// use gh_client::github::GitHubClient;
///
/// # async fn example() -> Result<(), gh_client::github::GitHubError> {
/// // Token from GITHUB_TOKEN if set, 15 second timeout
/// let client = GitHubClient::new(None, None)?;
/// let user = client.get_user("octocat").await?;
/// println!("{:?}", user.as_json());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
    pub(crate) auth: Option<GitHubAuth>,
}

impl GitHubClient {
    /// Create a client against the public GitHub API
    ///
    /// # Arguments
    /// * `token` - Bearer token; falls back to `GITHUB_TOKEN`, then to none
    /// * `timeout` - Per-request timeout in seconds (default 15.0)
    ///
    /// # Errors
    /// Fails only if the HTTP session cannot be built, e.g. for a negative
    /// timeout or a token that is not a valid header value
    pub fn new(token: Option<String>, timeout: Option<f64>) -> Result<Self, GitHubError> {
        let mut config = ClientConfig::new().with_timeout(timeout.unwrap_or(DEFAULT_TIMEOUT_SECS));
        if let Some(token) = token.or_else(token_from_env) {
            config = config.with_token(token);
        }
        Self::with_config(config)
    }

    /// Create a client from fully resolved settings.
    /// Unlike [`GitHubClient::new`] this never reads the environment.
    pub fn with_config(config: ClientConfig) -> Result<Self, GitHubError> {
        let timeout = Duration::try_from_secs_f64(config.timeout).map_err(|_| {
            GitHubError::new(format!("Invalid timeout: {} seconds", config.timeout))
        })?;
        let auth = GitHubAuth::from_optional(config.token);
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| GitHubError::new(format!("Invalid API base URL: {}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| GitHubError::new("Invalid user-agent header value"))?,
        );
        if let Some(auth) = &auth {
            let mut value = HeaderValue::from_str(&auth.get_auth_header())
                .map_err(|_| GitHubError::new("GitHub token contains invalid characters"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        debug!(
            %base_url,
            authenticated = auth.is_some(),
            "created GitHub client"
        );

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    /// Check if the client has authentication configured
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Issue a GET request for the path made of `segments` (relative to the
    /// base URL)
    ///
    /// Every segment is percent-encoded, so `?`, `#` or `%` inside an argument
    /// cannot leave its segment. Query pairs are URL-encoded by reqwest.
    /// No retries, no caching.
    pub(crate) async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Payload, GitHubError> {
        let url = self.endpoint(segments)?;
        debug!(%url, ?query, "GET");

        let mut request = self.client.get(url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        debug!(status = response.status().as_u16(), %url, "response received");
        classify_response(response).await
    }

    /// Append `segments` to the base URL path
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GitHubError> {
        // `.` and `..` would be resolved away and change the endpoint
        if let Some(segment) = segments
            .iter()
            .find(|segment| segment.is_empty() || **segment == "." || **segment == "..")
        {
            return Err(GitHubError::new(format!(
                "Invalid path segment: '{}'",
                segment
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GitHubError::new(format!("Invalid API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Turn a response into a payload or an error.
///
/// First match wins:
/// 1. 403 with `x-ratelimit-remaining: 0` is a rate-limit error
/// 2. any 4xx/5xx is an API error with the body's `message` (or the raw body)
/// 3. otherwise JSON is parsed when the content type says so, else raw text
async fn classify_response(response: Response) -> Result<Payload, GitHubError> {
    let status = response.status();
    let remaining = header_value(&response, RATELIMIT_REMAINING_HEADER);
    let reset = header_value(&response, RATELIMIT_RESET_HEADER);
    let content_type = header_value(&response, CONTENT_TYPE.as_str()).unwrap_or_default();

    if status == StatusCode::FORBIDDEN && remaining.as_deref() == Some("0") {
        let reset = reset.unwrap_or_else(|| "None".to_string());
        return Err(GitHubError::rate_limited(&reset));
    }

    if status.is_client_error() || status.is_server_error() {
        let body = response.text().await?;
        return Err(GitHubError::status(status.as_u16(), &error_message(&body)));
    }

    if content_type.contains("application/json") {
        let value: Value = response.json().await?;
        trace!("decoded JSON payload");
        Ok(Payload::Json(value))
    } else {
        Ok(Payload::Text(response.text().await?))
    }
}

fn header_value(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Pick the `message` field out of an error body, falling back to the body
/// itself when it is not a JSON object or has no `message`. Non-string
/// messages are rendered as JSON text, `null` as `None`.
pub(crate) fn error_message(body: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").cloned());
    match message {
        Some(Value::String(message)) => message,
        Some(Value::Null) => "None".to_string(),
        Some(other) => other.to_string(),
        None => body.to_string(),
    }
}
