//! GitHub Issues API operations

use super::client::GitHubClient;
use super::error::GitHubError;
use super::types::{IssueState, Payload};

impl GitHubClient {
    /// List issues of a repository (`GET /repos/{owner}/{repo}/issues`)
    ///
    /// GitHub includes pull requests in this listing. Only one page is fetched.
    pub async fn list_repo_issues(
        &self,
        owner: &str,
        repo: &str,
        state: IssueState,
    ) -> Result<Payload, GitHubError> {
        let path = ["repos", owner, repo, "issues"];
        self.get(&path, &[("state", state.as_str().to_string())])
            .await
    }
}
