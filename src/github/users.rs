//! GitHub user API operations

use super::client::GitHubClient;
use super::error::GitHubError;
use super::types::Payload;

impl GitHubClient {
    /// Get the user the configured token belongs to (`GET /user`)
    ///
    /// Without a token GitHub answers 401, which surfaces as a [`GitHubError`].
    pub async fn get_authenticated_user(&self) -> Result<Payload, GitHubError> {
        self.get(&["user"], &[]).await
    }

    /// Get the public profile of `username` (`GET /users/{username}`)
    ///
    /// # Example
    /// ```rust,no_run
    /// use gh_client::github::GitHubClient;
    ///
    /// # async fn example() -> Result<(), gh_client::github::GitHubError> {
    /// let client = GitHubClient::new(None, None)?;
    /// let profile = client.get_user("octocat").await?;
    /// if let Some(user) = profile.as_json() {
    ///     println!("{}", user["name"]);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_user(&self, username: &str) -> Result<Payload, GitHubError> {
        self.get(&["users", username], &[]).await
    }
}
