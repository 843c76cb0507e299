//! `issues` command implementation

use super::{Command, CommandContext, validators};
use crate::github::IssueState;
use crate::output::render_payload;
use anyhow::Result;
use async_trait::async_trait;

/// List issues of a repository
pub struct IssuesCommand {
    pub owner: String,
    pub repo: String,
    pub state: IssueState,
}

#[async_trait]
impl Command for IssuesCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_path_segment("owner", &self.owner)?;
        validators::validate_path_segment("repo", &self.repo)?;

        let payload = context
            .client
            .list_repo_issues(&self.owner, &self.repo, self.state)
            .await?;
        println!("{}", render_payload(&payload, context.output));
        Ok(())
    }
}
