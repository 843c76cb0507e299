//! `repos` command implementation

use super::{Command, CommandContext, validators};
use crate::constants::github::DEFAULT_REPO_SORT;
use crate::output::{render_payload, render_repo_summary};
use anyhow::Result;
use async_trait::async_trait;

/// List repositories of a user
pub struct ReposCommand {
    pub username: String,
    /// Page size forwarded as `per_page`
    pub per_page: u32,
    /// One line per repository instead of raw JSON
    pub summary: bool,
}

#[async_trait]
impl Command for ReposCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_path_segment("username", &self.username)?;

        let payload = context
            .client
            .list_user_repos(&self.username, self.per_page, DEFAULT_REPO_SORT)
            .await?;

        let rendered = match (payload.as_json(), self.summary) {
            (Some(value), true) => render_repo_summary(value, context.output.color),
            _ => render_payload(&payload, context.output),
        };
        println!("{}", rendered);
        Ok(())
    }
}
