//! Central constants for the gh-client application

/// Default values for GitHub API access
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Media type requested through the `accept` header
    pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github+json";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("gh-client/", env!("CARGO_PKG_VERSION"));

    /// Per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: f64 = 15.0;

    /// Page size used when listing repositories
    pub const DEFAULT_PER_PAGE: u32 = 30;

    /// Sort order used when listing repositories
    pub const DEFAULT_REPO_SORT: &str = "updated";

    /// Response headers describing the rate limit window
    pub const RATELIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
    pub const RATELIMIT_RESET_HEADER: &str = "x-ratelimit-reset";
}

/// Environment variables read at startup
pub mod env {
    /// Bearer token used for authenticated requests
    pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

    /// Base URL override (GitHub Enterprise, local mocks)
    pub const API_URL_VAR: &str = "GITHUB_API_URL";

    /// Dotenv file read from the working directory when no explicit path is given
    pub const DEFAULT_ENV_FILE: &str = ".env";
}
