//! Bearer token handling

/// Token used to authenticate GitHub API requests
#[derive(Clone)]
pub struct GitHubAuth {
    token: String,
}

impl GitHubAuth {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Build an auth only for a present, non-blank token
    pub fn from_optional(token: Option<String>) -> Option<Self> {
        token
            .filter(|token| !token.trim().is_empty())
            .map(Self::new)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `authorization` header
    pub fn get_auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// Tokens must never end up in logs
impl std::fmt::Debug for GitHubAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}
