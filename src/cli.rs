//! Command-line arguments

use crate::constants::github::{DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS};
use crate::github::IssueState;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gh-client")]
#[command(about = "Tiny GitHub API CLI")]
#[command(version)]
pub struct Cli {
    /// GitHub token (overrides GITHUB_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    /// Dotenv file to load (default: .env, ignored when missing)
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Show the authenticated user
    Me,

    /// Show public profile for a username
    User {
        username: String,
    },

    /// List repos for a username
    Repos {
        username: String,

        /// Number of repositories to fetch (single page)
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: u32,

        /// Print one line per repository instead of JSON
        #[arg(long)]
        summary: bool,
    },

    /// List issues for a repo
    Issues {
        owner: String,
        repo: String,

        /// Issue state filter
        #[arg(long, value_enum, default_value_t = IssueState::Open)]
        state: IssueState,
    },
}
