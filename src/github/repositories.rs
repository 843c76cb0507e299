//! GitHub Repository API operations

use super::client::GitHubClient;
use super::error::GitHubError;
use super::types::Payload;

impl GitHubClient {
    /// List public repositories of a user (`GET /users/{username}/repos`)
    ///
    /// Only the single page GitHub returns is fetched; no pagination.
    ///
    /// # Arguments
    /// * `username` - Account whose repositories are listed
    /// * `per_page` - Page size (GitHub default 30, max 100)
    /// * `sort` - Sort key, e.g. `updated`, `created`, `pushed`, `full_name`
    ///
    /// # Example
    /// ```rust,no_run
    /// use gh_client::github::{DEFAULT_PER_PAGE, DEFAULT_REPO_SORT, GitHubClient};
    ///
    /// # async fn example() -> Result<(), gh_client::github::GitHubError> {
    /// let client = GitHubClient::new(None, None)?;
    /// let repos = client
    ///     .list_user_repos("octocat", DEFAULT_PER_PAGE, DEFAULT_REPO_SORT)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_user_repos(
        &self,
        username: &str,
        per_page: u32,
        sort: &str,
    ) -> Result<Payload, GitHubError> {
        let path = ["users", username, "repos"];
        let query = [("per_page", per_page.to_string()), ("sort", sort.to_string())];
        self.get(&path, &query).await
    }
}
