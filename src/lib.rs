//! gh-client - a tiny command-line client for the GitHub REST API

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod github;
pub mod output;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::ClientConfig;
pub use github::{GitHubClient, GitHubError, IssueState, Payload};
