//! Base types and traits for the command pattern

use crate::github::GitHubClient;
use crate::output::OutputOptions;
use anyhow::Result;

/// Context passed to all commands: the API client and how to print results
#[derive(Clone)]
pub struct CommandContext {
    /// Client built from the resolved configuration
    pub client: GitHubClient,
    /// Rendering options
    pub output: OutputOptions,
}

impl CommandContext {
    pub fn new(client: GitHubClient, output: OutputOptions) -> Self {
        Self { client, output }
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
