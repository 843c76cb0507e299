//! `user` command implementation

use super::{Command, CommandContext, validators};
use crate::output::render_payload;
use anyhow::Result;
use async_trait::async_trait;

/// Show the public profile of a user
pub struct UserCommand {
    pub username: String,
}

#[async_trait]
impl Command for UserCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_path_segment("username", &self.username)?;

        let payload = context.client.get_user(&self.username).await?;
        println!("{}", render_payload(&payload, context.output));
        Ok(())
    }
}
