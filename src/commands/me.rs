//! `me` command implementation

use super::{Command, CommandContext};
use crate::output::render_payload;
use anyhow::Result;
use async_trait::async_trait;

/// Show the authenticated user
pub struct MeCommand;

#[async_trait]
impl Command for MeCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let payload = context.client.get_authenticated_user().await?;
        println!("{}", render_payload(&payload, context.output));
        Ok(())
    }
}
